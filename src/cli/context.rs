//! Per-command setup: configuration, catalog location and loading.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};

use super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::builder::{BuilderOptions, CatalogBuilder};

pub struct CommandContext {
    pub config: Config,
    pub catalog_path: PathBuf,
    pub options: BuilderOptions,
}

impl CommandContext {
    /// Resolve configuration from the current directory.
    ///
    /// `--catalog` is relative to the current directory, the config's
    /// `catalog` to the config file. Imports resolve next to the catalog.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        Self::from_dir(&cwd, common)
    }

    pub fn from_dir(dir: &Path, common: &CommonArgs) -> Result<Self> {
        let loaded = load_config(dir)?;
        super::init_logging(common.verbose || loaded.config.debug);

        let catalog_path = match &common.catalog {
            Some(path) => dir.join(path),
            None => loaded.catalog_path(),
        };
        let base_dir = catalog_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| loaded.root.clone());

        let mut options = loaded.config.builder_options(&base_dir);
        options.strict |= common.strict;

        tracing::debug!(
            catalog = %catalog_path.display(),
            strict = options.strict,
            "Resolved catalog"
        );

        Ok(Self {
            config: loaded.config,
            catalog_path,
            options,
        })
    }

    /// Load the catalog file. In strict mode any load failure is an error.
    pub fn load(&self) -> Result<CatalogBuilder> {
        let mut builder = CatalogBuilder::with_options(self.options.clone());
        builder
            .load_from_file(&self.catalog_path)
            .with_context(|| format!("Failed to load {}", self.catalog_path.display()))?;
        Ok(builder)
    }

    pub fn default_language(&self) -> &str {
        &self.config.default_language
    }
}
