//! Landing page (site root).

use dioxus::prelude::*;

use crate::app::api;
use crate::app::components::{Layout, ProductCard};

/// Number of products teased on the landing page.
const FEATURED_COUNT: usize = 3;

#[component]
pub fn Landing() -> Element {
    let catalog = use_resource(|| async { api::load_catalog().await });

    let featured = catalog
        .read()
        .clone()
        .map(|c| c.products.into_iter().take(FEATURED_COUNT).collect::<Vec<_>>())
        .unwrap_or_default();

    rsx! {
        Layout {
            title: "Welcome".to_string(),
            nav_active: "landing".to_string(),

            section { class: "hero",
                h1 { "Everyday things, well made" }
                p { "Homeware, stationery and small gifts." }
                a { class: "hero-cta", href: "pages/home.html", "Browse the shop" }
            }

            if !featured.is_empty() {
                section { class: "featured",
                    h2 { "Featured" }
                    div { class: "product-grid",
                        for product in featured {
                            ProductCard {
                                key: "{product.name}",
                                product: product.clone(),
                                visible: true,
                            }
                        }
                    }
                }
            }
        }
    }
}
