//! Error types for the sf-catalog crate.
//!
//! This module provides the [`CatalogError`] type covering the two ways a
//! store operation can fail.
//!
//! # Error Recovery Strategy
//!
//! - **Load failures** ([`CatalogError::Load`]): the store enters
//!   [`LoadState::Errored`](crate::LoadState::Errored) with a descriptive
//!   message; the caller may re-invoke `load()` to retry. Never automatic.
//! - **Not found** ([`CatalogError::NotFound`]): an edit or delete named an
//!   id that is not in the collection. Ids are sourced from the same
//!   in-memory list being displayed, so this is a logic fault in the
//!   caller rather than a user-facing condition.

use sf_client::ClientError;
use sf_core::ProductId;

/// Errors that can occur during catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Fetching the product list from the store API failed.
    #[error("failed to load catalog: {0}")]
    Load(#[from] ClientError),

    /// An edit or delete targeted an id the store does not hold.
    #[error("product {id} not found")]
    NotFound {
        /// The id that was requested.
        id: ProductId,
    },
}

impl CatalogError {
    /// Creates a new [`CatalogError::NotFound`] error.
    #[inline]
    #[must_use]
    pub const fn not_found(id: ProductId) -> Self {
        Self::NotFound { id }
    }

    /// Returns `true` if this error is a missing-id fault.
    #[inline]
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::not_found(ProductId::new(42));
        assert!(err.is_not_found());
        insta::assert_snapshot!(err.to_string(), @"product 42 not found");
    }

    #[test]
    fn test_load_error_wraps_client_error() {
        let err = CatalogError::from(ClientError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://fakestoreapi.com/products".to_owned(),
        });
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("failed to load catalog"));
        assert!(err.to_string().contains("502"));
    }
}
