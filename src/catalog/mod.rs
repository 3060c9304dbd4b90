//! Static product listing shown on the shop page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod filter;

pub use filter::{CategoryFilter, ProductFilter};

/// Catalog bundled into the binary; used when no override is configured.
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Price as it goes into the `data-price` attribute.
    pub fn price_attr(&self) -> String {
        self.price.to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("product {name:?} is listed more than once")]
    DuplicateName { name: String },
    #[error("product {name:?} has an empty category")]
    EmptyCategory { name: String },
    #[error("product {name:?} has an invalid price {price}")]
    InvalidPrice { name: String, price: f64 },
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (index, product) in self.products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            // Names key the product cards.
            if self.products[..index].iter().any(|p| p.name == product.name) {
                return Err(CatalogError::DuplicateName {
                    name: product.name.clone(),
                });
            }
            if product.category.trim().is_empty() {
                return Err(CatalogError::EmptyCategory {
                    name: product.name.clone(),
                });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    name: product.name.clone(),
                    price: product.price,
                });
            }
        }
        Ok(())
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
