//! Dioxus fullstack page components.
//!
//! These pages use Dioxus signals and server functions instead of inline JavaScript.

mod cart;
mod checkout;
mod contact;
mod home;
mod landing;

pub use cart::Cart;
pub use checkout::Checkout;
pub use contact::Contact;
pub use home::Home;
pub use landing::Landing;
