//! Shared UI components for the storefront pages.

pub mod layout;
pub mod nav;
pub mod notification;
pub mod product;
pub mod theme;

pub use layout::Layout;
pub use nav::{CartCount, Nav};
pub use notification::NotificationTray;
pub use product::ProductCard;
pub use theme::ThemeToggle;
