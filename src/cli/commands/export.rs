use anyhow::{Context, Ok, Result};

use super::super::args::ExportCommand;
use super::super::context::CommandContext;
use super::{CommandResult, CommandSummary, ExportSummary, load_issues};
use crate::core::writer::CatalogDocumentWriter;

/// Write the loaded catalog, imports flattened, as a single document.
pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let builder = ctx.load()?;
    let issues = load_issues(&builder);

    let summary = match cmd.output {
        Some(output) => {
            CatalogDocumentWriter::new()
                .save(builder.catalog(), &output)
                .with_context(|| format!("Failed to export to {}", output.display()))?;
            ExportSummary::File(output)
        }
        None => ExportSummary::Stdout(builder.to_document_string()),
    };

    Ok(CommandResult::new(CommandSummary::Export(summary)).with_issues(issues))
}
