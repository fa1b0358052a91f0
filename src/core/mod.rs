//! Core catalog engine.
//!
//! Load pipeline: `parsers::xml` (recursive imports) -> `catalog` (merge +
//! normalize). Edits go through `builder`, which saves with `writer`.
//!
//! - `builder`: edit-then-save facade with best-effort or strict failure handling
//! - `catalog`: normalized language -> key -> value store
//! - `formatter`: `$1`, `$2`, ... placeholder substitution
//! - `parsers`: document parsers
//! - `source`: files and embedded resources
//! - `writer`: document serialization

pub mod builder;
pub mod catalog;
pub mod formatter;
pub mod parsers;
pub mod source;
pub mod writer;

pub use builder::{BuilderOptions, CatalogBuilder};
pub use catalog::{LanguageMap, ParsedDocument, TranslationCatalog};
pub use parsers::xml::{CatalogDocumentParser, ParseOutcome, ParserOptions};
pub use source::{EmbeddedResources, ResourceProvider};
pub use writer::CatalogDocumentWriter;
