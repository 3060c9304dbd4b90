//! Cart page component.
//!
//! Lists cart lines with Remove controls, the running total, and the
//! checkout / clear controls (hidden while the cart is empty).

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_shop;
use crate::cart::CartLine;

/// Cart page component.
#[component]
pub fn Cart() -> Element {
    let shop = use_shop();

    // Re-validate persisted state whenever the page is shown
    use_effect(move || {
        shop.sync();
    });

    let summary = shop.summary();
    let total = summary.total_display();

    rsx! {
        Layout {
            title: "Cart".to_string(),
            nav_active: "cart".to_string(),

            h1 { "Your Cart" }

            div { id: "cart-items",
                if summary.is_empty() {
                    p { class: "empty-cart-message", "Your cart is empty" }
                } else {
                    for line in summary.lines.iter() {
                        CartLineRow { key: "{line.index}", line: line.clone() }
                    }
                }
            }

            div { id: "cart-total", style: summary.control_display("display:block;"),
                "Total: $"
                span { id: "total-price", "{total}" }
            }

            div { class: "cart-actions",
                a {
                    class: "checkout-button",
                    href: "checkout.html",
                    style: summary.control_display("display:inline-block;"),
                    "Proceed to Checkout"
                }
                button {
                    class: "clear-cart-button",
                    r#type: "button",
                    style: summary.control_display("display:inline-block;"),
                    onclick: move |_| shop.clear(),
                    "Clear Cart"
                }
            }
        }
    }
}

#[component]
fn CartLineRow(line: CartLine) -> Element {
    let shop = use_shop();
    let index = line.index;
    let label = line.label();

    rsx! {
        div { class: "cart-item",
            p { "{label}" }
            button {
                r#type: "button",
                onclick: move |_| shop.remove_at(index),
                "Remove"
            }
        }
    }
}
