//! Parse-and-validate for the persisted cart, kept free of storage I/O.

use serde_json::Value;

use super::CartItem;

/// Why a persisted cart was discarded wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// Nothing stored, or the literal strings `"null"` / `"undefined"`
    Missing,
    /// Not valid JSON
    Unparsable,
    /// Valid JSON but not an array
    NotAnArray,
    /// An empty array
    Empty,
    /// Storage could not be read at all
    StorageUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    /// Every element was a valid item; storage needs no rewrite.
    Items(Vec<CartItem>),
    /// Some elements were dropped; storage must be rewritten.
    Filtered {
        items: Vec<CartItem>,
        discarded: usize,
    },
    /// Start over with an empty cart; storage must be rewritten.
    Reset(ResetReason),
}

impl Validated {
    pub fn into_items(self) -> Vec<CartItem> {
        match self {
            Validated::Items(items) | Validated::Filtered { items, .. } => items,
            Validated::Reset(_) => Vec::new(),
        }
    }

    /// Whether the persisted value differs from what was recovered.
    pub fn needs_persist(&self) -> bool {
        !matches!(self, Validated::Items(_))
    }
}

/// Validate the raw persisted cart string.
pub fn validate_persisted(raw: Option<&str>) -> Validated {
    let raw = match raw {
        Some(raw) if !raw.is_empty() && raw != "null" && raw != "undefined" => raw,
        _ => return Validated::Reset(ResetReason::Missing),
    };

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return Validated::Reset(ResetReason::Unparsable),
    };

    let elements = match parsed {
        Value::Array(elements) if elements.is_empty() => {
            return Validated::Reset(ResetReason::Empty)
        }
        Value::Array(elements) => elements,
        _ => return Validated::Reset(ResetReason::NotAnArray),
    };

    let total = elements.len();
    let items: Vec<CartItem> = elements.iter().filter_map(item_from_value).collect();
    let discarded = total - items.len();

    if discarded == 0 {
        Validated::Items(items)
    } else {
        Validated::Filtered { items, discarded }
    }
}

/// An element is an item iff it is an object with a non-empty string
/// `product` and a numeric `price`. Extra fields are ignored.
fn item_from_value(value: &Value) -> Option<CartItem> {
    let object = value.as_object()?;
    let product = object.get("product")?.as_str()?;
    let price = object.get("price")?.as_f64()?;
    CartItem::new(product, price).ok()
}
