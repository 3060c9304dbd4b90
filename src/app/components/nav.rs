//! Header navigation: logo, page links, cart badge and theme toggle.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::state::use_shop;
use crate::app::Route;

/// Where the logo leads. Relative, so it works from the site root and from
/// inside `pages/`.
pub fn home_href(current_path: &str) -> &'static str {
    if current_path.contains("index.html")
        || current_path.ends_with('/')
        || !current_path.contains("pages/")
    {
        "pages/home.html"
    } else {
        "home.html"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "cart")
    pub active: String,
}

/// Navigation bar with mobile toggle.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);
    let current_path = use_route::<Route>().to_string();
    let home = home_href(&current_path);

    let nav_link_class = |page: &str| {
        if props.active == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let mobile_menu_class = if menu_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    rsx! {
        nav { class: "navbar",
            // Logo / Brand
            a { class: "logo-section", href: "{home}",
                span { class: "header-logo", "Storefront" }
            }

            // Desktop navigation
            div { class: "nav-links",
                a { class: nav_link_class("home"), href: "/pages/home.html", "Shop" }
                a { class: nav_link_class("contact"), href: "/pages/contact.html", "Contact" }
                a { class: nav_link_class("cart"), href: "/pages/cart.html",
                    i { class: "fa-solid fa-cart-shopping" }
                    " "
                    CartCount {}
                }
                ThemeToggle {}
            }

            // Mobile menu button
            button {
                class: "menu-toggle",
                r#type: "button",
                onclick: move |_| menu_open.toggle(),
                span { class: "sr-only", "Toggle menu" }
                if menu_open() {
                    i { class: "fa-solid fa-xmark" }
                } else {
                    i { class: "fa-solid fa-bars" }
                }
            }
        }

        // Mobile menu
        div { class: "{mobile_menu_class}", id: "mobile-menu",
            a { class: nav_link_class("home"), href: "/pages/home.html", onclick: move |_| menu_open.set(false), "Shop" }
            a { class: nav_link_class("contact"), href: "/pages/contact.html", onclick: move |_| menu_open.set(false), "Contact" }
            a { class: nav_link_class("cart"), href: "/pages/cart.html", onclick: move |_| menu_open.set(false),
                "Cart "
                CartCount {}
            }
        }
    }
}

/// One `#cart-count` badge. The header renders several; all track the cart.
#[component]
pub fn CartCount() -> Element {
    let shop = use_shop();
    let count = shop.count();

    rsx! {
        span { id: "cart-count", class: "cart-count", "{count}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_href_from_root() {
        assert_eq!(home_href("/"), "pages/home.html");
        assert_eq!(home_href("/index.html"), "pages/home.html");
        assert_eq!(home_href(""), "pages/home.html");
    }

    #[test]
    fn test_home_href_from_pages() {
        assert_eq!(home_href("/pages/cart.html"), "home.html");
        assert_eq!(home_href("/pages/home.html"), "home.html");
        assert_eq!(home_href("/shop/pages/checkout.html"), "home.html");
    }

    #[test]
    fn test_home_href_trailing_slash_wins() {
        assert_eq!(home_href("/pages/"), "pages/home.html");
    }
}
