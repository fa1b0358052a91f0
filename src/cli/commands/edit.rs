//! Commands that change the catalog and write it back.

use anyhow::{Context, Ok, Result, bail};

use super::super::args::{
    AddLanguageCommand, CommonArgs, PutCommand, RemoveCommand, RemoveKeyCommand,
};
use super::super::context::CommandContext;
use super::{CommandResult, CommandSummary, EditSummary};
use crate::core::builder::CatalogBuilder;
use crate::error::CatalogError;

pub fn put(cmd: PutCommand) -> Result<CommandResult> {
    let change = format!("Set {}.{}", cmd.language, cmd.key);
    edit(&cmd.common, change, |builder| {
        builder.put_translation(&cmd.language, &cmd.key, &cmd.value);
    })
}

pub fn remove(cmd: RemoveCommand) -> Result<CommandResult> {
    match cmd.key {
        Some(key) => {
            let change = format!("Removed {}.{}", cmd.language, key);
            edit(&cmd.common, change, |builder| {
                builder.remove_translation(&cmd.language, &key);
            })
        }
        None => {
            let change = format!("Removed language {}", cmd.language);
            edit(&cmd.common, change, |builder| {
                builder.remove_language(&cmd.language);
            })
        }
    }
}

pub fn remove_key(cmd: RemoveKeyCommand) -> Result<CommandResult> {
    let change = format!("Removed key {}", cmd.key);
    edit(&cmd.common, change, |builder| builder.remove_key(&cmd.key))
}

pub fn add_language(cmd: AddLanguageCommand) -> Result<CommandResult> {
    let change = format!("Added language {}", cmd.language);
    edit(&cmd.common, change, |builder| {
        builder.put_language(&cmd.language);
    })
}

/// Load, apply `apply`, save back to the catalog path.
///
/// A missing catalog starts empty. Any other load failure aborts: saving a
/// partially loaded catalog would drop the entries that failed to load.
fn edit<F>(common: &CommonArgs, change: String, apply: F) -> Result<CommandResult>
where
    F: FnOnce(&mut CatalogBuilder),
{
    let ctx = CommandContext::new(common)?;
    let path = &ctx.catalog_path;

    let mut builder = if path.exists() {
        ctx.load()?
    } else {
        tracing::debug!(catalog = %path.display(), "Catalog does not exist yet, starting empty");
        CatalogBuilder::with_options(ctx.options.clone())
    };
    if let Some(err) = builder
        .diagnostics()
        .iter()
        .find(|err| !matches!(err, CatalogError::DocumentNotFound { .. }))
    {
        bail!("Refusing to rewrite {}: {}", path.display(), err.chain());
    }

    apply(&mut builder);

    builder
        .save_to_file(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    if let Some(err) = builder.diagnostics().first() {
        bail!("Failed to save {}: {}", path.display(), err.chain());
    }

    Ok(CommandResult::new(CommandSummary::Edit(EditSummary {
        catalog: path.clone(),
        change,
    })))
}
