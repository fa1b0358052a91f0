use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::builder::BuilderOptions;
use crate::core::parsers::xml::DEFAULT_MAX_IMPORT_DEPTH;

pub const CONFIG_FILE_NAME: &str = ".langsysrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog document, relative to the config file's directory.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Fail on load/save errors instead of continuing with a partial catalog.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_max_import_depth")]
    pub max_import_depth: usize,
    #[serde(default)]
    pub debug: bool,
}

fn default_catalog() -> String {
    "languages.xml".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

fn default_max_import_depth() -> usize {
    DEFAULT_MAX_IMPORT_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            default_language: default_language(),
            strict: false,
            max_import_depth: default_max_import_depth(),
            debug: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.trim().is_empty() {
            bail!("'catalog' must not be empty");
        }
        if self.default_language.trim().is_empty() {
            bail!("'defaultLanguage' must not be empty");
        }
        if self.max_import_depth == 0 {
            bail!("'maxImportDepth' must be at least 1");
        }
        Ok(())
    }

    /// Builder options rooted at `base_dir` (the config file's directory).
    pub fn builder_options(&self, base_dir: &Path) -> BuilderOptions {
        BuilderOptions {
            strict: self.strict,
            max_import_depth: self.max_import_depth,
            base_dir: base_dir.to_path_buf(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the catalog path is relative to.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(&self.config.catalog)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            tracing::debug!(path = %path.display(), "Loaded configuration");
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
