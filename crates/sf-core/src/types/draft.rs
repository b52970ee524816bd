//! Candidate product payloads.
//!
//! A [`ProductDraft`] is a product-shaped payload that has not yet been
//! validated or committed to the catalog store. Every field is present and
//! defaulted rather than optional: the original create/edit forms passed
//! around partial objects and merged them structurally, which this type
//! replaces with an explicit merge at the store boundary.

use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// A candidate product payload not yet validated or committed.
///
/// Drafts start empty (see [`Default`]) and are filled in by the form layer,
/// then run through `sf-validate` before the store accepts them. The same
/// type serves both creation (the store assigns the id) and editing (the
/// store keeps the existing id).
///
/// # Examples
///
/// ```
/// use sf_core::{ProductDraft, ProductId};
///
/// let draft = ProductDraft {
///     title: "Widget".to_owned(),
///     description: "A thoroughly adequate widget for most purposes.".to_owned(),
///     price: 9.99,
///     category: "tools".to_owned(),
///     image: "https://img.example/widget.png".to_owned(),
/// };
///
/// let product = draft.into_product(ProductId::new(21));
/// assert_eq!(product.id, ProductId::new(21));
/// assert_eq!(product.title, "Widget");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    /// Display title.
    pub title: String,

    /// Longer free-text description.
    pub description: String,

    /// Unit price.
    pub price: f64,

    /// Category name. Empty until the user selects one.
    pub category: String,

    /// Image URL.
    pub image: String,
}

impl ProductDraft {
    /// Converts this draft into a [`Product`] under the given id.
    ///
    /// This is the single merge point between a candidate payload and the
    /// store's collection; the store decides the id, the draft supplies
    /// everything else.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
        }
    }
}

impl From<Product> for ProductDraft {
    /// Prefills a draft from an existing product, for edit forms.
    fn from(product: Product) -> Self {
        Self {
            title: product.title,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
        }
    }
}
