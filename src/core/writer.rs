//! Serializes a [`TranslationCatalog`] back into the `<languages>` format.
//!
//! Exports are always flattened: no `<import-language>` directives are
//! written, and composite keys (`read~gerund`) are emitted literally as plain
//! `<translated>` keys.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::core::catalog::TranslationCatalog;
use crate::error::{CatalogError, Result};

const INDENT_SIZE: usize = 2;

#[derive(Debug, Clone)]
pub struct CatalogDocumentWriter {
    product: String,
    version: String,
}

impl Default for CatalogDocumentWriter {
    fn default() -> Self {
        Self {
            product: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl CatalogDocumentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the product name and version written in the header comment.
    pub fn with_product(product: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
        }
    }

    /// Render the catalog as a document string.
    pub fn to_document_string(&self, catalog: &TranslationCatalog) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(catalog, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the document to `path`, creating parent directories as needed.
    pub fn save(&self, catalog: &TranslationCatalog, path: &Path) -> Result<()> {
        let write_failure = |source: io::Error| CatalogError::IoWriteFailure {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_failure)?;
        }

        let mut sink = BufWriter::new(File::create(path).map_err(write_failure)?);
        self.write_to(catalog, &mut sink).map_err(write_failure)?;
        sink.write_all(b"\n").map_err(write_failure)?;
        sink.flush().map_err(write_failure)?;

        tracing::debug!(path = %path.display(), "Saved catalog document");
        Ok(())
    }

    /// Stream the document into any byte sink.
    pub fn write_to<W: Write>(&self, catalog: &TranslationCatalog, sink: W) -> io::Result<()> {
        let mut writer = Writer::new_with_indent(sink, b' ', INDENT_SIZE);

        let header = format!("{} {}", self.product, self.version);
        emit(&mut writer, Event::Comment(BytesText::from_escaped(header)))?;
        let count = format!("LANGUAGES: {}", catalog.language_count());
        emit(&mut writer, Event::Comment(BytesText::from_escaped(count)))?;

        emit(&mut writer, Event::Start(BytesStart::new("languages")))?;
        for (language, entries) in catalog.iter() {
            let start = BytesStart::new("language").with_attributes([("value", language)]);
            emit(&mut writer, Event::Start(start))?;

            for (key, value) in entries {
                let start =
                    BytesStart::new("translated").with_attributes([("value", key.as_str())]);
                emit(&mut writer, Event::Start(start))?;
                emit(&mut writer, Event::Start(BytesStart::new("value")))?;
                emit(&mut writer, Event::Text(BytesText::from_escaped(escape(value))))?;
                emit(&mut writer, Event::End(BytesEnd::new("value")))?;
                emit(&mut writer, Event::End(BytesEnd::new("translated")))?;
            }

            emit(&mut writer, Event::End(BytesEnd::new("language")))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("languages")))?;

        Ok(())
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> io::Result<()> {
    writer
        .write_event(event)
        .map_err(|err| io::Error::other(err.to_string()))
}

/// Escape text content: `&`, `<`, `>`, `"` and `'`.
pub fn escape_text(value: &str) -> String {
    escape(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parsers::xml::CatalogDocumentParser;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> TranslationCatalog {
        let mut catalog = TranslationCatalog::new();
        catalog.put_translation("english", "hello", "Hello");
        catalog.put_translation("portuguese", "hello", "Olá");
        catalog.put_translation("portuguese", "exit", "Sair");
        catalog
    }

    #[test]
    fn test_document_layout() {
        let writer = CatalogDocumentWriter::with_product("langsys", "1.0");
        insta::assert_snapshot!(writer.to_document_string(&sample()), @r#"
<!--langsys 1.0-->
<!--LANGUAGES: 2-->
<languages>
  <language value="english">
    <translated value="hello">
      <value>Hello</value>
    </translated>
    <translated value="exit">
      <value></value>
    </translated>
  </language>
  <language value="portuguese">
    <translated value="hello">
      <value>Olá</value>
    </translated>
    <translated value="exit">
      <value>Sair</value>
    </translated>
  </language>
</languages>
"#);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text(r#"5 < 10 & "ok""#),
            "5 &lt; 10 &amp; &quot;ok&quot;"
        );
        assert_eq!(escape_text("it's > x"), "it&apos;s &gt; x");
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escaped_value_round_trips() {
        let mut catalog = TranslationCatalog::new();
        catalog.put_translation("english", "cmp", r#"5 < 10 & "ok""#);

        let doc = CatalogDocumentWriter::new().to_document_string(&catalog);
        assert!(doc.contains("<value>5 &lt; 10 &amp; &quot;ok&quot;</value>"));

        let parsed = CatalogDocumentParser::new().parse_str(&doc).unwrap().document;
        assert_eq!(parsed.get("english", "cmp"), Some(r#"5 < 10 & "ok""#));
    }

    #[test]
    fn test_escaped_attributes_round_trip() {
        let mut catalog = TranslationCatalog::new();
        catalog.put_translation(r#"en "US" & co"#, r#"say "hi" & <bye>"#, "Hi");

        let doc = CatalogDocumentWriter::new().to_document_string(&catalog);
        assert!(doc.contains(r#"<language value="en &quot;US&quot; &amp; co">"#));
        assert!(doc.contains(
            r#"<translated value="say &quot;hi&quot; &amp; &lt;bye&gt;">"#
        ));

        let reparsed = TranslationCatalog::from(
            CatalogDocumentParser::new().parse_str(&doc).unwrap().document,
        );
        assert_eq!(reparsed.get(r#"en "US" & co"#, r#"say "hi" & <bye>"#), Some("Hi"));
        assert_eq!(reparsed, catalog);
    }

    #[test]
    fn test_round_trip_plain_keys() {
        let catalog = sample();
        let doc = CatalogDocumentWriter::new().to_document_string(&catalog);
        let reparsed = TranslationCatalog::from(
            CatalogDocumentParser::new().parse_str(&doc).unwrap().document,
        );
        assert_eq!(reparsed, catalog);
    }

    #[test]
    fn test_composite_keys_are_written_literally() {
        let mut catalog = TranslationCatalog::new();
        catalog.put_translation("portuguese", "read~gerund", "lendo");
        let doc = CatalogDocumentWriter::new().to_document_string(&catalog);
        assert!(doc.contains(r#"<translated value="read~gerund">"#));
        assert!(!doc.contains("tense="));
    }

    #[test]
    fn test_empty_catalog() {
        let doc = CatalogDocumentWriter::new().to_document_string(&TranslationCatalog::new());
        assert!(doc.contains("<!--LANGUAGES: 0-->"));
        assert!(doc.contains("<languages>"));
        assert!(doc.ends_with("</languages>"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("lang.xml");
        CatalogDocumentWriter::new().save(&sample(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("</languages>\n"));
        let reparsed = CatalogDocumentParser::new().parse_file(&path).unwrap();
        assert_eq!(reparsed.document.get("portuguese", "exit"), Some("Sair"));
    }

    #[test]
    fn test_save_to_directory_fails() {
        let dir = tempdir().unwrap();
        let err = CatalogDocumentWriter::new()
            .save(&sample(), dir.path())
            .unwrap_err();
        assert!(matches!(err, CatalogError::IoWriteFailure { .. }));
    }
}
