//! Read-only lookups: `languages`, `keys` and `get`.

use anyhow::{Ok, Result};

use super::super::args::{GetCommand, KeysCommand, LanguagesCommand};
use super::super::context::CommandContext;
use super::{CatalogIssue, CommandResult, CommandSummary, load_issues};
use crate::registry::LanguageRegistry;

pub fn languages(cmd: LanguagesCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let builder = ctx.load()?;
    let languages = builder
        .catalog()
        .languages()
        .map(str::to_string)
        .collect();
    Ok(CommandResult::new(CommandSummary::Languages(languages)).with_issues(load_issues(&builder)))
}

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let builder = ctx.load()?;
    let catalog = builder.catalog();

    let mut issues = load_issues(&builder);
    if !catalog.exists_language(&cmd.language) {
        issues.push(CatalogIssue::UnknownLanguage {
            language: cmd.language.clone(),
        });
    }
    let keys = catalog
        .keys(&cmd.language)
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(CommandResult::new(CommandSummary::Keys(keys)).with_issues(issues))
}

/// Look up a key in `--lang` (or the default language) and fill in placeholders.
pub fn get(cmd: GetCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let builder = ctx.load()?;
    let mut issues = load_issues(&builder);

    let language = cmd
        .lang
        .clone()
        .unwrap_or_else(|| ctx.default_language().to_string());
    let registry = LanguageRegistry::from_catalog(&language, builder.into_catalog());

    let text = registry.get_formatted(&cmd.key, cmd.values.as_slice());
    if text.is_none() {
        issues.push(if registry.exists_language(&language) {
            CatalogIssue::MissingTranslation {
                language,
                key: cmd.key.clone(),
            }
        } else {
            CatalogIssue::UnknownLanguage { language }
        });
    }
    Ok(CommandResult::new(CommandSummary::Get(text)).with_issues(issues))
}
