//! Runtime lookup registry.
//!
//! Holds a loaded catalog and the current language, resolves keys on demand
//! and pushes fresh text into bound targets whenever the language changes.
//! Targets are anything implementing [`SettableText`]; the registry never
//! knows about a UI toolkit.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use crate::core::builder::{BuilderOptions, CatalogBuilder};
use crate::core::catalog::TranslationCatalog;
use crate::core::formatter;
use crate::core::source::ResourceProvider;
use crate::error::Result;

/// Something whose displayed text can be replaced.
pub trait SettableText {
    fn set_text(&mut self, text: &str);
}

impl<T: SettableText + ?Sized> SettableText for Rc<RefCell<T>> {
    fn set_text(&mut self, text: &str) {
        self.borrow_mut().set_text(text);
    }
}

impl SettableText for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Callback invoked with the new language after every language change.
pub type LanguageListener = Box<dyn FnMut(&str)>;

struct Binding {
    target: Box<dyn SettableText>,
    key: String,
}

pub struct LanguageRegistry {
    catalog: TranslationCatalog,
    current: String,
    bindings: Vec<Binding>,
    listeners: Vec<LanguageListener>,
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("current", &self.current)
            .field("languages", &self.catalog.language_count())
            .field("bindings", &self.bindings.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LanguageRegistry {
    pub fn new(language: &str) -> Self {
        Self::from_catalog(language, TranslationCatalog::new())
    }

    pub fn from_catalog(language: &str, catalog: TranslationCatalog) -> Self {
        Self {
            catalog,
            current: language.to_string(),
            bindings: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Load a catalog file. Failures follow `options.strict`.
    pub fn from_file(
        language: &str,
        path: impl AsRef<Path>,
        options: BuilderOptions,
    ) -> Result<Self> {
        let mut builder = CatalogBuilder::with_options(options);
        builder.load_from_file(path)?;
        Ok(Self::from_catalog(language, builder.into_catalog()))
    }

    /// Load a catalog from an embedded resource. Failures follow `options.strict`.
    pub fn from_resource(
        language: &str,
        resources: &dyn ResourceProvider,
        id: &str,
        options: BuilderOptions,
    ) -> Result<Self> {
        let mut builder = CatalogBuilder::with_options(options);
        builder.load_from_resource(resources, id)?;
        Ok(Self::from_catalog(language, builder.into_catalog()))
    }

    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    /// Replace the catalog and re-apply every binding.
    pub fn replace_catalog(&mut self, catalog: TranslationCatalog) {
        self.catalog = catalog;
        self.apply_bindings();
    }

    // ------------------------------------------------------------
    // Current language
    // ------------------------------------------------------------

    pub fn current_language(&self) -> &str {
        &self.current
    }

    /// Switch language, refresh bound targets and notify listeners.
    ///
    /// The language does not have to exist in the catalog; lookups then
    /// fall back to their defaults.
    pub fn set_current_language(&mut self, language: &str) {
        self.current = language.to_string();
        self.apply_bindings();
        self.notify();
    }

    /// Switch to `language`, or to `fallback` if the catalog lacks it.
    pub fn set_current_language_or(&mut self, language: &str, fallback: &str) {
        let chosen = if self.exists_language(language) {
            language
        } else {
            tracing::debug!(language, fallback, "Unknown language, using fallback");
            fallback
        };
        self.set_current_language(chosen);
    }

    pub fn on_language_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.current);
        }
    }

    // ------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------

    /// Translation of `key` in the current language.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.catalog.get(&self.current, key)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.catalog.get_value(&self.current, key, default)
    }

    pub fn get_value<'a>(&'a self, language: &str, key: &str, default: &'a str) -> &'a str {
        self.catalog.get_value(language, key, default)
    }

    /// Text pushed to bound targets: the translation, or "" when missing.
    pub fn resolve(&self, key: &str) -> &str {
        self.get_or(key, "")
    }

    /// Look up `key` and substitute `$1`, `$2`, ... with `values`.
    pub fn get_formatted<S: AsRef<str>>(&self, key: &str, values: &[S]) -> Option<String> {
        self.get(key).map(|text| formatter::format(text, values))
    }

    pub fn format<S: AsRef<str>>(&self, text: &str, values: &[S]) -> String {
        formatter::format(text, values)
    }

    pub fn is_formattable(&self, text: &str) -> bool {
        formatter::has_placeholders(text)
    }

    pub fn exists_language(&self, language: &str) -> bool {
        self.catalog.exists_language(language)
    }

    /// True if `key` exists in the current language.
    pub fn exists_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn languages(&self) -> Vec<&str> {
        self.catalog.languages().collect()
    }

    pub fn keys(&self, language: &str) -> Vec<&str> {
        self.catalog.keys(language)
    }

    // ------------------------------------------------------------
    // Bindings
    // ------------------------------------------------------------

    /// Keep `target` showing the translation of `key`; applied immediately.
    pub fn bind(&mut self, mut target: impl SettableText + 'static, key: &str) {
        target.set_text(self.resolve(key));
        self.bindings.push(Binding {
            target: Box::new(target),
            key: key.to_string(),
        });
    }

    /// Bind several targets to the same key.
    pub fn bind_all<T, I>(&mut self, key: &str, targets: I)
    where
        T: SettableText + 'static,
        I: IntoIterator<Item = T>,
    {
        for target in targets {
            self.bind(target, key);
        }
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Drop every binding.
    pub fn clear_bindings(&mut self) {
        self.bindings.clear();
    }

    fn apply_bindings(&mut self) {
        tracing::debug!(
            language = %self.current,
            bindings = self.bindings.len(),
            "Applying translations"
        );
        let catalog = &self.catalog;
        let current = &self.current;
        for binding in &mut self.bindings {
            let text = catalog.get_value(current, &binding.key, "");
            binding.target.set_text(text);
        }
    }
}
