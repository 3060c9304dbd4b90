//! Checkout page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::dom;
use crate::app::state::use_shop;

/// Read-only order summary plus the checkout form.
#[component]
pub fn Checkout() -> Element {
    let shop = use_shop();

    use_effect(move || {
        shop.sync();
    });

    let summary = shop.summary();
    let total = summary.total_display();

    let place_order = move |evt: FormEvent| {
        evt.prevent_default();
        let event = shop.place_order();
        dom::alert(&event.to_string());
        dom::navigate_to("home.html");
    };

    rsx! {
        Layout {
            title: "Checkout".to_string(),
            nav_active: "checkout".to_string(),

            h1 { "Checkout" }

            section { class: "checkout-summary",
                h2 { "Order Summary" }
                div { id: "checkout-items",
                    if summary.is_empty() {
                        p { class: "empty-cart-message", "No items in cart" }
                    } else {
                        for line in summary.lines.iter() {
                            p { key: "{line.index}", {line.label()} }
                        }
                    }
                }
                p { class: "checkout-total-line",
                    "Total: $"
                    span { id: "checkout-total", "{total}" }
                }
            }

            form { id: "checkout-form", onsubmit: place_order,
                label { "Full name"
                    input { r#type: "text", name: "name", required: true }
                }
                label { "Email"
                    input { r#type: "email", name: "email", required: true }
                }
                label { "Shipping address"
                    textarea { name: "address", required: true }
                }
                button { r#type: "submit", "Place Order" }
            }
        }
    }
}
