//! Product card with its add-to-cart button.

use dioxus::prelude::*;

use crate::app::state::use_shop;
use crate::cart::format_price;
use crate::catalog::Product;

#[component]
pub fn ProductCard(product: Product, visible: bool) -> Element {
    let shop = use_shop();

    let name = product.name.clone();
    let price_attr = product.price_attr();
    let price_display = format_price(product.price);
    let display = if visible { "display:block;" } else { "display:none;" };

    let add = {
        let name = name.clone();
        let price_attr = price_attr.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            if !name.is_empty() && !price_attr.is_empty() {
                shop.add(&name, &price_attr);
            }
        }
    };

    rsx! {
        div {
            class: "product-container",
            style: display,
            "data-name": "{name}",
            "data-category": "{product.category}",
            if let Some(image) = &product.image {
                img { class: "product-image", src: "{image}", alt: "{name}" }
            }
            h3 { class: "product-name", "{name}" }
            if let Some(description) = &product.description {
                p { class: "product-description", "{description}" }
            }
            p { class: "product-price", "${price_display}" }
            button {
                class: "add-to-cart",
                "data-product": "{name}",
                "data-price": "{price_attr}",
                onclick: add,
                "Add to Cart"
            }
        }
    }
}
