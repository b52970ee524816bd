//! Product records and identifiers.
//!
//! This module provides the [`Product`] record held by the catalog store and
//! the [`ProductId`] newtype identifying it.

use serde::{Deserialize, Serialize};

/// An opaque identifier for a product.
///
/// Uses a newtype pattern for type safety - prevents accidentally using a
/// raw integer where a product id is expected. Ids are assigned by the
/// remote store API on load, or by the catalog store for locally created
/// products.
///
/// # Examples
///
/// ```
/// use sf_core::ProductId;
///
/// let id1 = ProductId::new(7);
/// let id2 = ProductId::new(7);
/// let id3 = ProductId::new(8);
///
/// assert_eq!(id1, id2);
/// assert_ne!(id1, id3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Creates a new product id from a u64 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u64 {
    #[inline]
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product record held by the catalog store.
///
/// Products are created in bulk when the store loads from the remote API,
/// individually appended on local creation, replaced in place on edit, and
/// removed on delete. No product outlives the in-memory session.
///
/// The serde field names match the store API's JSON payload exactly, so the
/// type deserializes straight from a `GET /products` response; unknown
/// payload fields (ratings and the like) are ignored.
///
/// # Invariants
///
/// - `id` is unique within the catalog store at all times.
/// - `price` is a non-negative finite number for any product that passed
///   form validation; products from the remote API are trusted as-is.
///
/// # Examples
///
/// ```
/// use sf_core::{Product, ProductId};
///
/// let json = r#"{
///     "id": 1,
///     "title": "Backpack",
///     "price": 109.95,
///     "description": "Fits 15 inch laptops",
///     "category": "men's clothing",
///     "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg"
/// }"#;
///
/// let product: Product = serde_json::from_str(json).unwrap();
/// assert_eq!(product.id, ProductId::new(1));
/// assert_eq!(product.category, "men's clothing");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for this product.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Longer free-text description.
    pub description: String,

    /// Unit price. Non-negative.
    pub price: f64,

    /// Category name, exactly as the store API spells it.
    pub category: String,

    /// Image URL.
    pub image: String,
}
