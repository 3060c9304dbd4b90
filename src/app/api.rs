//! Server functions shared by SSR and the WASM client.

use dioxus::prelude::*;

use crate::catalog::Catalog;

/// Catalog configured on the server.
#[server]
pub async fn fetch_catalog() -> Result<Catalog, ServerFnError> {
    Ok(crate::server::catalog())
}

/// Server catalog, or the bundled one when the call fails.
pub async fn load_catalog() -> Catalog {
    match fetch_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("Failed to fetch catalog, using bundled: {}", e);
            Catalog::bundled().unwrap_or_default()
        }
    }
}
