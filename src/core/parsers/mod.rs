//! Catalog document parsers.
//!
//! - `xml`: the `<languages>` document format, with recursive import resolution

pub mod xml;
