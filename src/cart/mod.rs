//! Shopping cart: line items, persisted-state validation, the owning store
//! and the view model the cart/checkout pages render from.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod store;
pub mod validate;
pub mod view;

pub use store::{CartStore, SyncReport};
pub use validate::{validate_persisted, ResetReason, Validated};
pub use view::{format_price, CartLine, CartSummary};

/// One line in the cart. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product: String,
    pub price: f64,
}

impl CartItem {
    /// Build an item, enforcing a non-empty product and a finite price.
    pub fn new(product: impl Into<String>, price: f64) -> Result<Self, CartError> {
        let product = product.into();
        if product.is_empty() {
            return Err(CartError::EmptyProduct);
        }
        if !price.is_finite() {
            return Err(CartError::InvalidPrice(price.to_string()));
        }
        Ok(Self { product, price })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CartError {
    #[error("product name is empty")]
    EmptyProduct,
    #[error("price {0:?} is not a number")]
    InvalidPrice(String),
}

/// Outcome of a cart mutation, surfaced to the shopper as a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Added(String),
    Removed,
    Emptied,
    Cleared,
    OrderPlaced,
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartEvent::Added(product) => write!(f, "{product} added to cart!"),
            CartEvent::Removed => f.write_str("Item removed from cart"),
            CartEvent::Emptied => f.write_str("Cart is now empty"),
            CartEvent::Cleared => f.write_str("Cart cleared"),
            CartEvent::OrderPlaced => f.write_str("Order placed successfully!"),
        }
    }
}

/// Lenient price coercion for `data-price` attribute text.
///
/// Accepts the longest leading numeric prefix (`"9.99"`, `" 12"`, `"3.5kg"`),
/// and rejects anything that does not start with a number or overflows.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());
    let numeric = &trimmed[..end];

    (1..=numeric.len())
        .rev()
        .find_map(|len| numeric[..len].parse::<f64>().ok())
        .filter(|price| price.is_finite())
}
