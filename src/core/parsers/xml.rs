//! Streaming parser for XML catalog documents.
//!
//! Document shape:
//!
//! ```xml
//! <languages>
//!   <import-language file="common.xml"/>
//!   <language value="english">
//!     <translated value="hello">
//!       <value>Hello</value>
//!     </translated>
//!     <translated value="read">
//!       <value tense="participle">read</value>
//!       <value tense="gerund">reading</value>
//!     </translated>
//!   </language>
//! </languages>
//! ```
//!
//! The document is scanned once, forward only. `<import-language>` directives
//! are resolved the moment they are seen and their translations are overlaid
//! onto what has been read so far, so later definitions win.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::core::catalog::{ParsedDocument, composite_key, is_composite_key};
use crate::core::source::{ResourceProvider, read_document};
use crate::error::{CatalogError, Result};

/// Default bound on `<import-language>` nesting.
pub const DEFAULT_MAX_IMPORT_DEPTH: usize = 16;

const LANGUAGE_TAG: &str = "language";
const TRANSLATED_TAG: &str = "translated";
const VALUE_TAG: &str = "value";
const IMPORT_TAG: &str = "import-language";

const VALUE_ATTR: &str = "value";
const TENSE_ATTR: &str = "tense";
const FILE_ATTR: &str = "file";

/// Origin label for documents parsed from a string.
const MEMORY_ORIGIN: &str = "<memory>";

#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Maximum nesting of imports below the top-level document.
    pub max_import_depth: usize,
    /// Directory that relative imports resolve against when the importing
    /// document is not a file (strings, embedded resources).
    pub base_dir: PathBuf,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_import_depth: DEFAULT_MAX_IMPORT_DEPTH,
            base_dir: PathBuf::from("."),
        }
    }
}

/// Result of parsing a document.
///
/// Failed imports do not abort the parse: they are skipped and collected in
/// `warnings`.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub document: ParsedDocument,
    pub warnings: Vec<CatalogError>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogDocumentParser {
    options: ParserOptions,
}

impl CatalogDocumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a document file and everything it imports.
    pub fn parse_file(&self, path: &Path) -> Result<ParseOutcome> {
        let mut stack = Vec::new();
        let mut warnings = Vec::new();
        let document = self.parse_file_at(path, 0, &mut stack, &mut warnings)?;
        Ok(ParseOutcome { document, warnings })
    }

    /// Parse document text held in memory.
    pub fn parse_str(&self, text: &str) -> Result<ParseOutcome> {
        self.parse_detached(text, MEMORY_ORIGIN)
    }

    /// Parse a named resource from `resources`.
    pub fn parse_resource(
        &self,
        resources: &dyn ResourceProvider,
        id: &str,
    ) -> Result<ParseOutcome> {
        let text = resources
            .open(id)
            .ok_or_else(|| CatalogError::ResourceNotFound { id: id.to_string() })?;
        self.parse_detached(&text, id)
    }

    fn parse_detached(&self, text: &str, origin: &str) -> Result<ParseOutcome> {
        let mut stack = Vec::new();
        let mut warnings = Vec::new();
        let document = DocumentReader {
            parser: self,
            origin,
            base_dir: &self.options.base_dir,
            depth: 0,
            stack: &mut stack,
            warnings: &mut warnings,
        }
        .read(Reader::from_str(text))?;
        Ok(ParseOutcome { document, warnings })
    }

    fn parse_file_at(
        &self,
        path: &Path,
        depth: usize,
        stack: &mut Vec<PathBuf>,
        warnings: &mut Vec<CatalogError>,
    ) -> Result<ParsedDocument> {
        tracing::debug!(path = %path.display(), depth, "Parsing catalog document");

        let bytes = read_document(path)?;
        let origin = path.display().to_string();
        let base_dir = path.parent().unwrap_or(Path::new("."));

        stack.push(canonical(path));
        let result = DocumentReader {
            parser: self,
            origin: &origin,
            base_dir,
            depth,
            stack: &mut *stack,
            warnings,
        }
        .read(Reader::from_reader(bytes.as_slice()));
        stack.pop();
        result
    }
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Strip leading and trailing ASCII whitespace and control characters.
///
/// Non-ASCII spaces such as U+00A0 and U+3000 are content and stay.
fn trim_xml_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

// ============================================================
// Document Reader
// ============================================================

/// Where the reader is inside the `<languages>` structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Idle,
    InLanguage,
    InTranslated,
    InValue,
}

/// Open element kinds, used to undo state transitions on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Language,
    Translated,
    Value,
    Other,
}

/// Reads one document; imports spawn a fresh reader sharing the import stack.
struct DocumentReader<'a> {
    parser: &'a CatalogDocumentParser,
    origin: &'a str,
    base_dir: &'a Path,
    depth: usize,
    stack: &'a mut Vec<PathBuf>,
    warnings: &'a mut Vec<CatalogError>,
}

/// Per-document element state.
struct ElementState {
    state: ParserState,
    frames: Vec<Frame>,
    language: Option<String>,
    key: Option<String>,
    tense: Option<String>,
    text: String,
    saw_root: bool,
}

impl ElementState {
    fn new() -> Self {
        Self {
            state: ParserState::Idle,
            frames: Vec::new(),
            language: None,
            key: None,
            tense: None,
            text: String::new(),
            saw_root: false,
        }
    }
}

impl DocumentReader<'_> {
    /// Byte readers pick up the encoding from a BOM or the XML declaration;
    /// string readers are always UTF-8.
    fn read(mut self, mut reader: Reader<&[u8]>) -> Result<ParsedDocument> {
        reader.trim_text(false);

        let mut document = ParsedDocument::new();
        let mut el = ElementState::new();

        loop {
            let event = reader.read_event().map_err(|err| {
                CatalogError::malformed(
                    self.origin,
                    format!("at byte {}: {}", reader.buffer_position(), err),
                )
            })?;
            let decoder = reader.decoder();

            match event {
                Event::Start(e) => {
                    let frame = self.open(&e, decoder, &mut el, &mut document)?;
                    el.frames.push(frame);
                }
                Event::Empty(e) => {
                    let frame = self.open(&e, decoder, &mut el, &mut document)?;
                    self.close(frame, &mut el, &mut document);
                }
                Event::End(_) => {
                    let frame = el.frames.pop().ok_or_else(|| {
                        CatalogError::malformed(self.origin, "unexpected closing tag")
                    })?;
                    self.close(frame, &mut el, &mut document);
                }
                Event::Text(t) if el.state == ParserState::InValue => {
                    let text = self.decode(decoder, &t)?;
                    let unescaped =
                        unescape(&text).map_err(|err| CatalogError::malformed(self.origin, err))?;
                    el.text.push_str(&unescaped);
                }
                Event::CData(c) if el.state == ParserState::InValue => {
                    let text = self.decode(decoder, &c)?;
                    el.text.push_str(&text);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !el.frames.is_empty() {
            return Err(CatalogError::malformed(
                self.origin,
                format!("{} unclosed element(s) at end of document", el.frames.len()),
            ));
        }
        if !el.saw_root {
            return Err(CatalogError::malformed(self.origin, "no root element"));
        }

        Ok(document)
    }

    fn open(
        &mut self,
        e: &BytesStart<'_>,
        decoder: Decoder,
        el: &mut ElementState,
        document: &mut ParsedDocument,
    ) -> Result<Frame> {
        if el.frames.is_empty() {
            if el.saw_root {
                return Err(CatalogError::malformed(
                    self.origin,
                    "multiple root elements",
                ));
            }
            el.saw_root = true;
        }

        let name = e.name();
        let name = name.as_ref();

        if name.eq_ignore_ascii_case(IMPORT_TAG.as_bytes()) {
            match self.attribute(e, decoder, FILE_ATTR)? {
                Some(file) => self.import(&file, document),
                None => tracing::warn!(origin = self.origin, "import-language without file"),
            }
            return Ok(Frame::Other);
        }

        if name.eq_ignore_ascii_case(LANGUAGE_TAG.as_bytes()) && el.state == ParserState::Idle {
            let Some(language) = self.attribute(e, decoder, VALUE_ATTR)? else {
                tracing::warn!(origin = self.origin, "Skipping language without value");
                return Ok(Frame::Other);
            };
            document.language_mut(&language);
            el.language = Some(language);
            el.tense = None;
            el.state = ParserState::InLanguage;
            return Ok(Frame::Language);
        }

        if name.eq_ignore_ascii_case(TRANSLATED_TAG.as_bytes())
            && el.state == ParserState::InLanguage
        {
            let Some(key) = self.attribute(e, decoder, VALUE_ATTR)? else {
                tracing::warn!(origin = self.origin, "Skipping translated without value");
                return Ok(Frame::Other);
            };
            el.key = Some(key);
            el.tense = None;
            el.state = ParserState::InTranslated;
            return Ok(Frame::Translated);
        }

        if name.eq_ignore_ascii_case(VALUE_TAG.as_bytes()) && el.state == ParserState::InTranslated
        {
            el.tense = self.attribute(e, decoder, TENSE_ATTR)?;
            el.text.clear();
            el.state = ParserState::InValue;
            return Ok(Frame::Value);
        }

        Ok(Frame::Other)
    }

    fn close(&mut self, frame: Frame, el: &mut ElementState, document: &mut ParsedDocument) {
        match frame {
            Frame::Value => {
                if let (Some(language), Some(base)) = (&el.language, &el.key) {
                    let key = match &el.tense {
                        Some(tense) if !is_composite_key(base) => composite_key(base, tense),
                        _ => base.clone(),
                    };
                    let value = trim_xml_whitespace(&el.text).to_string();
                    document.language_mut(language).insert(key, value);
                }
                el.text.clear();
                el.tense = None;
                el.state = ParserState::InTranslated;
            }
            Frame::Translated => {
                el.key = None;
                el.tense = None;
                el.state = ParserState::InLanguage;
            }
            Frame::Language => {
                el.language = None;
                el.state = ParserState::Idle;
            }
            Frame::Other => {}
        }
    }

    fn attribute(
        &self,
        e: &BytesStart<'_>,
        decoder: Decoder,
        name: &str,
    ) -> Result<Option<String>> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| CatalogError::malformed(self.origin, err))?;
            if attr.key.as_ref() == name.as_bytes() {
                let raw = self.decode(decoder, &attr.value)?;
                let value =
                    unescape(&raw).map_err(|err| CatalogError::malformed(self.origin, err))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn decode<'b>(&self, decoder: Decoder, bytes: &'b [u8]) -> Result<Cow<'b, str>> {
        decoder
            .decode(bytes)
            .map_err(|err| CatalogError::malformed(self.origin, err))
    }

    /// Parse `file` and overlay it onto `document`; failures become warnings.
    fn import(&mut self, file: &str, document: &mut ParsedDocument) {
        let path = self.base_dir.join(file);
        let depth = self.depth + 1;

        let result = if depth > self.parser.options.max_import_depth {
            Err(CatalogError::ImportDepthExceeded {
                file: file.to_string(),
                limit: self.parser.options.max_import_depth,
            })
        } else if self.stack.contains(&canonical(&path)) {
            Err(CatalogError::ImportCycleDetected {
                file: file.to_string(),
            })
        } else {
            self.parser
                .parse_file_at(&path, depth, self.stack, self.warnings)
                .map_err(|source| CatalogError::ImportFailed {
                    file: file.to_string(),
                    source: Box::new(source),
                })
        };

        match result {
            Ok(imported) => {
                tracing::debug!(origin = self.origin, file, "Imported catalog document");
                document.overlay(imported);
            }
            Err(err) => {
                tracing::warn!(origin = self.origin, "Skipping import: {}", err.chain());
                self.warnings.push(err);
            }
        }
    }
}

// ============================================================
// Tests
// ============================================================
