//! The pure filter engine.
//!
//! This module derives the visible subset of a product list from a search
//! query and a category selection. Filtering is deliberately free of side
//! effects and state: same inputs, same output, so the presentation layer
//! can re-derive the visible list whenever either input changes.
//!
//! # Matching Rules
//!
//! A product is visible when it satisfies BOTH rules:
//!
//! - **Query**: the query is empty, or its lowercase form is a substring of
//!   the lowercase title or the lowercase description.
//! - **Category**: the selection is the wildcard
//!   ([`WILDCARD_CATEGORY`](sf_core::WILDCARD_CATEGORY)), or equals the
//!   product's category exactly - case matters, because category names come
//!   verbatim from the store API.
//!
//! # Examples
//!
//! ```
//! use sf_catalog::filter_products;
//! use sf_core::{Product, ProductId};
//!
//! let products = vec![Product {
//!     id: ProductId::new(1),
//!     title: "Mens Casual T-Shirt".to_owned(),
//!     description: "Slim fit, breathable fabric".to_owned(),
//!     price: 15.99,
//!     category: "men's clothing".to_owned(),
//!     image: "https://img.example/shirt.png".to_owned(),
//! }];
//!
//! assert_eq!(filter_products(&products, "SHIRT", "All").len(), 1);
//! assert_eq!(filter_products(&products, "shirt", "electronics").len(), 0);
//! ```

use sf_core::{Product, SearchState, WILDCARD_CATEGORY};

/// A prepared query/category pair that can test products one at a time.
///
/// The query is lowercased once at construction so matching a whole list
/// does not re-lowercase it per product.
///
/// # Examples
///
/// ```
/// use sf_catalog::ProductFilter;
/// use sf_core::SearchState;
///
/// let filter = ProductFilter::from_state(&SearchState::default());
/// assert!(filter.is_unfiltered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Lowercased query; empty matches everything.
    query_lower: String,

    /// Selected category, or the wildcard.
    category: String,
}

impl ProductFilter {
    /// Creates a filter from a raw query and category selection.
    #[must_use]
    pub fn new(query: &str, category: impl Into<String>) -> Self {
        Self {
            query_lower: query.to_lowercase(),
            category: category.into(),
        }
    }

    /// Creates a filter from a search state snapshot.
    #[must_use]
    pub fn from_state(state: &SearchState) -> Self {
        Self::new(&state.query, state.category.clone())
    }

    /// Returns `true` if this filter passes every product through.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query_lower.is_empty() && self.category == WILDCARD_CATEGORY
    }

    /// Returns `true` if the product satisfies both the query and the
    /// category rule.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product) && self.matches_category(product)
    }

    /// The query rule: empty query, or case-insensitive substring of the
    /// title or description.
    fn matches_query(&self, product: &Product) -> bool {
        self.query_lower.is_empty()
            || product.title.to_lowercase().contains(&self.query_lower)
            || product
                .description
                .to_lowercase()
                .contains(&self.query_lower)
    }

    /// The category rule: wildcard, or exact case-sensitive equality.
    fn matches_category(&self, product: &Product) -> bool {
        self.category == WILDCARD_CATEGORY || product.category == self.category
    }
}

/// Derives the visible subset of `products` for a query and category.
///
/// The result preserves the relative order of the input and contains only
/// products satisfying both matching rules. With an empty query and the
/// wildcard category this is the identity (modulo cloning).
#[must_use]
pub fn filter_products(products: &[Product], query: &str, category: &str) -> Vec<Product> {
    let filter = ProductFilter::new(query, category);
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}
