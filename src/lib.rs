//! Langsys - XML-backed multilingual translation catalogs
//!
//! Langsys loads translation catalogs from `<languages>` XML documents
//! (following `<import-language>` directives), keeps every language aligned
//! to the same key set, formats `$1`-style placeholders, writes catalogs back
//! to disk and pushes translations into bound UI text targets when the
//! current language changes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog engine (parser, catalog, writer, builder, formatter)
//! - `error`: Catalog error type
//! - `registry`: Runtime lookup facade and text bindings

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod registry;

pub use crate::core::{
    BuilderOptions, CatalogBuilder, CatalogDocumentParser, CatalogDocumentWriter,
    EmbeddedResources, ResourceProvider, TranslationCatalog,
};
pub use error::{CatalogError, Result};
pub use registry::{LanguageRegistry, SettableText};
