//! Edit-then-save workflow over a [`TranslationCatalog`].
//!
//! The builder ties the parser, the catalog and the writer together. By
//! default loading and saving are best-effort: failures are logged and kept
//! in [`CatalogBuilder::diagnostics`], and the catalog is left empty or
//! partially merged. With `strict` set, the same failures are returned.

use std::path::{Path, PathBuf};

use crate::core::catalog::TranslationCatalog;
use crate::core::parsers::xml::{
    CatalogDocumentParser, DEFAULT_MAX_IMPORT_DEPTH, ParseOutcome, ParserOptions,
};
use crate::core::source::ResourceProvider;
use crate::core::writer::CatalogDocumentWriter;
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub struct BuilderOptions {
    /// Return load/save failures instead of swallowing them.
    ///
    /// In strict mode a load is all-or-nothing: a failed import rejects the
    /// whole document.
    pub strict: bool,
    pub max_import_depth: usize,
    /// Base directory for imports of in-memory and resource documents.
    pub base_dir: PathBuf,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_import_depth: DEFAULT_MAX_IMPORT_DEPTH,
            base_dir: PathBuf::from("."),
        }
    }
}

impl BuilderOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: TranslationCatalog,
    parser: CatalogDocumentParser,
    writer: CatalogDocumentWriter,
    strict: bool,
    file_path: Option<PathBuf>,
    diagnostics: Vec<CatalogError>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            parser: CatalogDocumentParser::with_options(ParserOptions {
                max_import_depth: options.max_import_depth,
                base_dir: options.base_dir,
            }),
            strict: options.strict,
            ..Self::default()
        }
    }

    /// Start from an existing catalog.
    pub fn from_catalog(catalog: TranslationCatalog, options: BuilderOptions) -> Self {
        let mut builder = Self::with_options(options);
        builder.catalog = catalog;
        builder
    }

    // ------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------

    /// Parse `path` and merge it into the catalog.
    ///
    /// The path is remembered for [`save`](Self::save) even when loading
    /// fails, so a missing catalog file is created on the first save.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.file_path = Some(path.to_path_buf());
        let outcome = self.parser.parse_file(path);
        self.absorb(outcome)
    }

    /// Parse a named resource and merge it into the catalog.
    pub fn load_from_resource(&mut self, resources: &dyn ResourceProvider, id: &str) -> Result<()> {
        let outcome = self.parser.parse_resource(resources, id);
        self.absorb(outcome)
    }

    /// Parse document text and merge it into the catalog.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let outcome = self.parser.parse_str(text);
        self.absorb(outcome)
    }

    fn absorb(&mut self, outcome: Result<ParseOutcome>) -> Result<()> {
        self.diagnostics.clear();

        let ParseOutcome {
            document,
            mut warnings,
        } = match outcome {
            Ok(outcome) => outcome,
            Err(err) => return self.fail(err),
        };

        if self.strict && !warnings.is_empty() {
            return Err(warnings.remove(0));
        }
        for warning in &warnings {
            tracing::warn!(kind = warning.kind(), "{}", warning.chain());
        }
        self.diagnostics = warnings;
        self.catalog.merge(document);
        Ok(())
    }

    fn fail(&mut self, err: CatalogError) -> Result<()> {
        if self.strict {
            return Err(err);
        }
        tracing::warn!(kind = err.kind(), "Ignoring catalog failure: {}", err.chain());
        self.diagnostics.push(err);
        Ok(())
    }

    // ------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------

    pub fn put_language(&mut self, language: &str) {
        self.catalog.put_language(language);
    }

    pub fn remove_language(&mut self, language: &str) {
        self.catalog.remove_language(language);
    }

    pub fn put_translation(&mut self, language: &str, key: &str, value: &str) {
        self.catalog.put_translation(language, key, value);
    }

    /// Remove one translation. Other languages that still hold `key` keep it
    /// alive, so it comes back here as an empty entry.
    pub fn remove_translation(&mut self, language: &str, key: &str) {
        self.catalog.remove_translation(language, key);
    }

    /// Remove `key` from every language.
    pub fn remove_key(&mut self, key: &str) {
        self.catalog.remove_key(key);
    }

    // ------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------

    /// Write the catalog to `path`.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.diagnostics.clear();
        let result = self.writer.save(&self.catalog, path.as_ref());
        match result {
            Ok(()) => Ok(()),
            Err(err) => self.fail(err),
        }
    }

    /// Write the catalog back to the last loaded file.
    pub fn save(&mut self) -> Result<()> {
        match self.file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => {
                self.diagnostics.clear();
                self.fail(CatalogError::NoDocumentPath)
            }
        }
    }

    pub fn to_document_string(&self) -> String {
        self.writer.to_document_string(&self.catalog)
    }

    // ------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------

    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> TranslationCatalog {
        self.catalog
    }

    /// Path of the last file passed to [`load_from_file`](Self::load_from_file).
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Failures swallowed by the last load or save in best-effort mode.
    pub fn diagnostics(&self) -> &[CatalogError] {
        &self.diagnostics
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}
