//! Error types for catalog parsing and persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by the document parser, writer and builder.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document does not exist on disk.
    #[error("Catalog document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    /// A named embedded resource is not registered.
    #[error("Catalog resource not found: {id}")]
    ResourceNotFound { id: String },

    /// The document is not well-formed XML.
    #[error("Malformed catalog document {origin}: {message}")]
    MalformedDocument { origin: String, message: String },

    /// An `<import-language>` directive could not be processed.
    #[error("Failed to import {file}")]
    ImportFailed {
        file: String,
        #[source]
        source: Box<CatalogError>,
    },

    /// The import graph loops back onto a document that is still being parsed.
    #[error("Import cycle detected at {file}")]
    ImportCycleDetected { file: String },

    /// Imports are nested deeper than the configured limit.
    #[error("Import of {file} exceeds the maximum nesting depth of {limit}")]
    ImportDepthExceeded { file: String, limit: usize },

    /// Reading a document failed.
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `save()` was called before any document path was known.
    #[error("No catalog path to save to: load a file first or save to an explicit path")]
    NoDocumentPath,

    /// Writing the serialized catalog failed.
    #[error("Failed to write {}", path.display())]
    IoWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    pub(crate) fn malformed(origin: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedDocument {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    /// This error followed by its causes, `: `-separated.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::DocumentNotFound { .. } => "document-not-found",
            CatalogError::ResourceNotFound { .. } => "resource-not-found",
            CatalogError::MalformedDocument { .. } => "malformed-document",
            CatalogError::ImportFailed { .. } => "import-failed",
            CatalogError::ImportCycleDetected { .. } => "import-cycle",
            CatalogError::ImportDepthExceeded { .. } => "import-depth",
            CatalogError::Io { .. } => "io-read",
            CatalogError::NoDocumentPath => "no-document-path",
            CatalogError::IoWriteFailure { .. } => "io-write",
        }
    }
}
