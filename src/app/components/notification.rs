//! Notification tray component.

use dioxus::prelude::*;

use crate::app::state::use_shop;

/// Stack of transient `.cart-notification` toasts.
#[component]
pub fn NotificationTray() -> Element {
    let shop = use_shop();
    let notices = shop.notices();

    rsx! {
        div { class: "notification-tray", aria_live: "polite",
            for notice in notices {
                div { key: "{notice.id}", class: notice.class(), "{notice.message}" }
            }
        }
    }
}
