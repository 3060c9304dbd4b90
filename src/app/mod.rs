//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod dom;
pub mod pages;
pub mod state;

use pages::{Cart, Checkout, Contact, Home, Landing};
use state::use_shop_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Single cart + notification context for all pages
    let shop = use_shop_provider();

    // Repair whatever a previous session left in storage
    use_effect(move || {
        shop.sync();
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/pages/home.html")]
    Home {},
    #[route("/pages/cart.html")]
    Cart {},
    #[route("/pages/checkout.html")]
    Checkout {},
    #[route("/pages/contact.html")]
    Contact {},
}
