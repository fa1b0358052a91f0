//! Where catalog documents come from.
//!
//! Documents are either files on disk or named resources bundled with the
//! application. Resource lookup goes through [`ResourceProvider`] so that the
//! core never assumes how an application ships its data.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{CatalogError, Result};

/// Supplies the contents of named resources (e.g. files compiled into the binary).
pub trait ResourceProvider {
    /// Return the document text for `id`, or `None` if no such resource exists.
    fn open(&self, id: &str) -> Option<Cow<'_, str>>;
}

/// Resource ids are matched without a leading `/`, so `"/lang.xml"` and
/// `"lang.xml"` name the same resource.
pub fn normalize_resource_id(id: &str) -> &str {
    id.trim_start_matches('/')
}

/// In-memory resource table, typically filled with `include_str!` contents.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: IndexMap<String, Cow<'static, str>>,
}

impl EmbeddedResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource, replacing any previous one with the same id.
    pub fn insert(&mut self, id: &str, text: impl Into<Cow<'static, str>>) -> &mut Self {
        self.entries
            .insert(normalize_resource_id(id).to_string(), text.into());
        self
    }

    pub fn with(mut self, id: &str, text: impl Into<Cow<'static, str>>) -> Self {
        self.insert(id, text);
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(normalize_resource_id(id))
    }
}

impl ResourceProvider for EmbeddedResources {
    fn open(&self, id: &str) -> Option<Cow<'_, str>> {
        self.entries
            .get(normalize_resource_id(id))
            .map(|text| Cow::Borrowed(text.as_ref()))
    }
}

/// Read a document from disk as raw bytes; the parser decodes them.
///
/// A missing file is reported as [`CatalogError::DocumentNotFound`] so callers
/// can tell "no catalog yet" apart from real I/O failures.
pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogError::DocumentNotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
