//! Shop page: search bar, category buttons and the product grid.

use dioxus::prelude::*;

use crate::app::api;
use crate::app::components::{Layout, ProductCard};
use crate::catalog::filter::ALL_CATEGORIES;
use crate::catalog::{CategoryFilter, ProductFilter};

/// Button label for a `data-category` value.
fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shop page component.
#[component]
pub fn Home() -> Element {
    let catalog = use_resource(|| async { api::load_catalog().await });

    let mut search = use_signal(String::new);
    let category = use_signal(CategoryFilter::default);

    let filter = ProductFilter::new(&search(), category());

    let content = match catalog.read().clone() {
        None => rsx! {
            div { class: "card", aria_busy: "true", "Loading products..." }
        },
        Some(catalog) if catalog.is_empty() => rsx! {
            div { class: "card", "No products available." }
        },
        Some(catalog) => {
            let categories: Vec<String> = std::iter::once(ALL_CATEGORIES)
                .chain(catalog.categories())
                .map(str::to_string)
                .collect();

            rsx! {
                div { class: "category-filters",
                    for value in categories {
                        CategoryButton {
                            key: "{value}",
                            active: filter.is_active_category(&value),
                            value: value.clone(),
                            selected: category,
                        }
                    }
                }
                div { class: "product-grid",
                    for product in catalog.products.iter() {
                        ProductCard {
                            key: "{product.name}",
                            product: product.clone(),
                            visible: filter.matches(product),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Shop".to_string(),
            nav_active: "home".to_string(),

            h1 { "Shop" }

            input {
                id: "search-bar",
                r#type: "search",
                placeholder: "Search products...",
                value: "{search}",
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }

            section { id: "products",
                {content}
            }
        }
    }
}

/// One `.category-btn`. Clicking it makes its category the active one.
#[component]
fn CategoryButton(value: String, active: bool, selected: Signal<CategoryFilter>) -> Element {
    let mut selected = selected;
    let class = if active { "category-btn active" } else { "category-btn" };
    let label = category_label(&value);
    let clicked = CategoryFilter::from_attr(&value);

    rsx! {
        button {
            class: class,
            r#type: "button",
            "data-category": "{value}",
            onclick: move |_| selected.set(clicked.clone()),
            "{label}"
        }
    }
}
