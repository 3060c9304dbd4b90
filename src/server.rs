//! Server-side startup: logging, configuration and the served catalog.

use std::sync::OnceLock;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::Catalog;
use crate::config::{self, Config};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Install the tracing subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // A subscriber may already be installed (tests, embedding host).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Load configuration and the catalog, falling back to defaults on error.
pub fn init() -> Config {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            let config = Config::default();
            init_logging(&config.log_filter);
            warn!("Failed to load configuration, using defaults: {:#}", e);
            install_catalog(&config);
            return config;
        }
    };

    init_logging(&config.log_filter);
    info!(?config, "Configuration loaded");
    install_catalog(&config);
    config
}

fn install_catalog(config: &Config) {
    let catalog = config.load_catalog().unwrap_or_else(|e| {
        warn!("Failed to load catalog, serving an empty one: {:#}", e);
        Catalog::default()
    });
    info!(products = catalog.len(), "Catalog loaded");
    let _ = CATALOG.set(catalog);
}

/// Catalog served to clients. Empty until [`init`] has run.
pub fn catalog() -> Catalog {
    CATALOG.get().cloned().unwrap_or_default()
}
