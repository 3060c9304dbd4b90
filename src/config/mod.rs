//! Configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::Catalog;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// JSON catalog to serve instead of the bundled one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

pub fn default_log_filter() -> String {
    "storefront_cart=debug,dioxus=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// The configured catalog, or the bundled one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Catalog::bundled().context("bundled catalog is invalid"),
        }
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))
}

pub fn load_config() -> Result<Config> {
    let config_dir = directories::ProjectDirs::from("com", "storefront", "storefront-cart")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    load_config_from(&config_dir)
}

fn load_config_from(config_dir: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("log_filter", default_log_filter())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (SHOP_CATALOG_PATH, SHOP_LOG_FILTER)
        .add_source(
            ::config::Environment::with_prefix("SHOP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
