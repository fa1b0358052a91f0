use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found while running a command against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A load failure that was skipped (failed import, missing document, ...).
    Load { kind: &'static str, message: String },
    /// A key whose value is empty in one language.
    Untranslated { language: String, key: String },
    /// `get` asked for a key the language does not have.
    MissingTranslation { language: String, key: String },
    UnknownLanguage { language: String },
}

impl CatalogIssue {
    pub fn from_error(err: &CatalogError) -> Self {
        CatalogIssue::Load {
            kind: err.kind(),
            message: err.chain(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CatalogIssue::Untranslated { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Short rule name shown next to the message.
    pub fn rule(&self) -> &'static str {
        match self {
            CatalogIssue::Load { kind, .. } => kind,
            CatalogIssue::Untranslated { .. } => "untranslated",
            CatalogIssue::MissingTranslation { .. } => "missing-translation",
            CatalogIssue::UnknownLanguage { .. } => "unknown-language",
        }
    }

    pub fn message(&self) -> String {
        match self {
            CatalogIssue::Load { message, .. } => message.clone(),
            CatalogIssue::Untranslated { language, key } => {
                format!("\"{}\" has no {} translation", key, language)
            }
            CatalogIssue::MissingTranslation { language, key } => {
                format!("\"{}\" is missing from {}", key, language)
            }
            CatalogIssue::UnknownLanguage { language } => {
                format!("Language \"{}\" is not in the catalog", language)
            }
        }
    }
}

#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub issues: Vec<CatalogIssue>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            issues: Vec::new(),
        }
    }

    pub fn with_issues(mut self, issues: Vec<CatalogIssue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_issue_count(self.issues.len())
    }
}

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Check(CheckSummary),
    Languages(Vec<String>),
    Keys(Vec<String>),
    /// Looked-up text, `None` when the key is missing.
    Get(Option<String>),
    Edit(EditSummary),
    Export(ExportSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub catalog: PathBuf,
    pub languages: usize,
    pub keys: usize,
}

#[derive(Debug)]
pub struct EditSummary {
    pub catalog: PathBuf,
    pub change: String,
}

#[derive(Debug)]
pub enum ExportSummary {
    Stdout(String),
    File(PathBuf),
}
