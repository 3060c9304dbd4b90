//! Layout component wrapping all pages with the shared header and footer.

use dioxus::prelude::*;

use super::nav::Nav;
use super::notification::NotificationTray;
use crate::theme::THEME_SCRIPT;

/// CSS for the widget's own elements; page theming lives in the site stylesheet.
const CUSTOM_STYLES: &str = r#"
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.category-filters { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.category-btn.active { background: var(--accent, #f59e0b); color: #111; }
.cart-item { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.cart-count { display: inline-block; min-width: 1.25rem; text-align: center; border-radius: 999px; font-size: 0.75rem; }
.empty-cart-message { opacity: 0.6; }
.notification-tray { position: fixed; right: 1rem; bottom: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 1000; }
.cart-notification { padding: 0.75rem 1rem; border-radius: 0.5rem; background: #16a34a; color: #fff; opacity: 0; transform: translateY(0.5rem); transition: opacity .3s, transform .3s; }
.cart-notification.show { opacity: 1; transform: translateY(0); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Storefront", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }

        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "Storefront v{version}" }
        }
        NotificationTray {}
    }
}
