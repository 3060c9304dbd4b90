//! Storefront Cart
//!
//! Serves (server feature) or hydrates (web feature) the storefront app.

use storefront_cart::app::App;

fn main() {
    #[cfg(feature = "server")]
    {
        let config = storefront_cart::server::init();
        tracing::info!(
            catalog = ?config.catalog_path,
            "Starting storefront-cart v{}",
            env!("CARGO_PKG_VERSION")
        );
    }

    dioxus::launch(App);
}
