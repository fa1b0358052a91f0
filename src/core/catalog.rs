//! In-memory translation catalog: language -> key -> value.
//!
//! Every mutation re-establishes key-set parity: after `normalize` each
//! language holds an entry (possibly empty) for every key present in any
//! language. Insertion order of languages and keys is preserved so that
//! serialization is stable.

use indexmap::{IndexMap, IndexSet};

/// Separator between a base key and its tense in composite keys (`read~gerund`).
pub const TENSE_SEPARATOR: char = '~';

/// Translations of a single language, keyed by translation key.
pub type LanguageMap = IndexMap<String, String>;

/// Returns true if `key` is already a composite `base~tense` key.
pub fn is_composite_key(key: &str) -> bool {
    key.contains(TENSE_SEPARATOR)
}

/// Builds the composite key for a tense-tagged value.
pub fn composite_key(base: &str, tense: &str) -> String {
    format!("{}{}{}", base, TENSE_SEPARATOR, tense)
}

// ============================================================
// Parsed Document
// ============================================================

/// Raw result of one parse pass, imports included.
///
/// Unlike [`TranslationCatalog`] it is not normalized; the caller merges it
/// into a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    languages: IndexMap<String, LanguageMap>,
}

impl ParsedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the map for `language`, creating it if absent.
    pub fn language_mut(&mut self, language: &str) -> &mut LanguageMap {
        self.languages.entry(language.to_string()).or_default()
    }

    pub fn language(&self, language: &str) -> Option<&LanguageMap> {
        self.languages.get(language)
    }

    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|map| map.get(key))
            .map(String::as_str)
    }

    /// Overlay `other` onto this document; values in `other` win.
    pub fn overlay(&mut self, other: ParsedDocument) {
        for (language, entries) in other.languages {
            self.language_mut(&language).extend(entries);
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl IntoIterator for ParsedDocument {
    type Item = (String, LanguageMap);
    type IntoIter = indexmap::map::IntoIter<String, LanguageMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.into_iter()
    }
}

// ============================================================
// Translation Catalog
// ============================================================

/// The normalized two-level translation store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    languages: IndexMap<String, LanguageMap>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `language` if absent.
    pub fn put_language(&mut self, language: &str) {
        if !self.languages.contains_key(language) {
            self.languages
                .insert(language.to_string(), LanguageMap::new());
        }
        self.normalize();
    }

    /// Delete `language` and all its translations.
    ///
    /// Keys that only existed in the removed language stay in the others.
    pub fn remove_language(&mut self, language: &str) -> Option<LanguageMap> {
        self.languages.shift_remove(language)
    }

    /// Set a translation, creating the language if absent.
    pub fn put_translation(&mut self, language: &str, key: &str, value: &str) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.normalize();
    }

    /// Delete a translation; no-op if the language or key is absent.
    ///
    /// Normalization runs afterwards, so if another language still has `key`
    /// it comes back here as an empty entry.
    pub fn remove_translation(&mut self, language: &str, key: &str) -> Option<String> {
        let removed = self
            .languages
            .get_mut(language)
            .and_then(|map| map.shift_remove(key));
        if removed.is_some() {
            self.normalize();
        }
        removed
    }

    /// Delete `key` from every language. Returns true if anything was removed.
    pub fn remove_key(&mut self, key: &str) -> bool {
        let mut removed = false;
        for map in self.languages.values_mut() {
            removed |= map.shift_remove(key).is_some();
        }
        removed
    }

    /// Overlay every language of `other` onto this catalog, then normalize.
    ///
    /// Accepts a [`ParsedDocument`] or another [`TranslationCatalog`].
    pub fn merge<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (String, LanguageMap)>,
    {
        for (language, entries) in other {
            self.languages.entry(language).or_default().extend(entries);
        }
        self.normalize();
    }

    /// Extend every language with the keys it is missing, mapped to "".
    ///
    /// Idempotent. Missing keys are appended in first-seen order.
    pub fn normalize(&mut self) {
        let all_keys: IndexSet<String> = self
            .languages
            .values()
            .flat_map(|map| map.keys().cloned())
            .collect();

        for map in self.languages.values_mut() {
            if map.len() == all_keys.len() {
                continue;
            }
            for key in &all_keys {
                if !map.contains_key(key) {
                    map.insert(key.clone(), String::new());
                }
            }
        }
    }

    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|map| map.get(key))
            .map(String::as_str)
    }

    /// Look up a translation, falling back to `default` when the language or
    /// key is missing.
    pub fn get_value<'a>(&'a self, language: &str, key: &str, default: &'a str) -> &'a str {
        self.get(language, key).unwrap_or(default)
    }

    pub fn exists_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn language(&self, language: &str) -> Option<&LanguageMap> {
        self.languages.get(language)
    }

    /// Language identifiers in stored order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Keys of `language` in stored order; empty if the language is unknown.
    pub fn keys(&self, language: &str) -> Vec<&str> {
        self.languages
            .get(language)
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Iterate `(language, translations)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageMap)> {
        self.languages.iter().map(|(lang, map)| (lang.as_str(), map))
    }

    /// Entries whose value is empty, as `(language, key)` pairs.
    pub fn empty_entries(&self) -> Vec<(&str, &str)> {
        self.iter()
            .flat_map(|(lang, map)| {
                map.iter()
                    .filter(|(_, value)| value.is_empty())
                    .map(move |(key, _)| (lang, key.as_str()))
            })
            .collect()
    }

    /// Number of languages.
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl IntoIterator for TranslationCatalog {
    type Item = (String, LanguageMap);
    type IntoIter = indexmap::map::IntoIter<String, LanguageMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.into_iter()
    }
}

impl From<ParsedDocument> for TranslationCatalog {
    fn from(document: ParsedDocument) -> Self {
        let mut catalog = Self::new();
        catalog.merge(document);
        catalog
    }
}

// ============================================================
// Tests
// ============================================================
