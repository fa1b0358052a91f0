use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::super::context::CommandContext;
use super::{CatalogIssue, CheckSummary, CommandResult, CommandSummary, load_issues};

/// Load the catalog and report skipped load failures and untranslated entries.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let builder = ctx.load()?;
    let catalog = builder.catalog();

    let mut issues = load_issues(&builder);
    issues.extend(
        catalog
            .empty_entries()
            .into_iter()
            .map(|(language, key)| CatalogIssue::Untranslated {
                language: language.to_string(),
                key: key.to_string(),
            }),
    );

    let keys = catalog
        .languages()
        .next()
        .map_or(0, |language| catalog.keys(language).len());

    Ok(CommandResult::new(CommandSummary::Check(CheckSummary {
        catalog: ctx.catalog_path.clone(),
        languages: catalog.language_count(),
        keys,
    }))
    .with_issues(issues))
}
