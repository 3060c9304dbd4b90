//! View model for the cart and checkout listings.

use super::CartItem;

/// Two-decimal price text, without currency symbol.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Position in the cart, used by the Remove control
    pub index: usize,
    pub product: String,
    pub price: f64,
}

impl CartLine {
    /// `"Mug - $9.99"`
    pub fn label(&self) -> String {
        format!("{} - ${}", self.product, format_price(self.price))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

impl CartSummary {
    pub fn from_items(items: &[CartItem]) -> Self {
        let lines: Vec<CartLine> = items
            .iter()
            .enumerate()
            .map(|(index, item)| CartLine {
                index,
                product: item.product.clone(),
                price: item.price,
            })
            .collect();
        let total = lines.iter().map(|line| line.price).sum();
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_display(&self) -> String {
        format_price(self.total)
    }

    /// Inline style for controls shown only when the cart has items
    /// (checkout and clear buttons, the total block).
    pub fn control_display(&self, shown_as: &'static str) -> &'static str {
        if self.is_empty() {
            "display:none;"
        } else {
            shown_as
        }
    }
}
