//! Search-text and category predicates over the product listing.

use super::Product;

/// Category button value matching every product.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a `data-category` value; `"all"` is the wildcard.
    pub fn from_attr(category: &str) -> Self {
        if category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(category.to_string())
        }
    }

    pub fn as_attr(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Active search term and category. A product is visible iff both match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    search: String,
    category: CategoryFilter,
}

impl ProductFilter {
    pub fn new(search: &str, category: CategoryFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            category,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Whether the category button carrying `data-category = category`
    /// should be marked active.
    pub fn is_active_category(&self, category: &str) -> bool {
        self.category.as_attr() == category
    }

    pub fn matches_search(&self, name: &str) -> bool {
        self.search.is_empty() || name.to_lowercase().contains(&self.search)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(&product.name) && self.category.matches(&product.category)
    }

    /// Products passing both predicates, in listing order.
    pub fn apply<'a>(&'a self, products: &'a [Product]) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |product| self.matches(product))
    }
}
