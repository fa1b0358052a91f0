pub mod check;
pub mod command_result;
pub mod edit;
pub mod export;
pub mod init;
pub mod query;

pub use command_result::{
    CatalogIssue, CheckSummary, CommandResult, CommandSummary, EditSummary, ExportSummary,
    InitSummary, Severity,
};

use crate::core::builder::CatalogBuilder;

/// Failures the last best-effort load skipped, as reportable issues.
pub(super) fn load_issues(builder: &CatalogBuilder) -> Vec<CatalogIssue> {
    builder
        .diagnostics()
        .iter()
        .map(CatalogIssue::from_error)
        .collect()
}
