//! In-memory catalog store with filtering and mutation notifications.
//!
//! This crate is the heart of the storefront engine. It holds the one
//! authoritative product collection for the session and exposes:
//!
//! - [`CatalogStore`] - bulk load from the store API, local
//!   create/edit/delete by id, owned snapshots, and a notification channel
//!   for the presentation layer
//! - [`LoadState`] - the Idle/Loading/Ready/Errored lifecycle of the
//!   initial load
//! - [`ProductFilter`] / [`filter_products`] - the pure filter engine
//!   deriving the visible subset from a search query and category selection
//! - [`CatalogError`] - load failures and not-found mutations
//!
//! # Data Flow
//!
//! ```text
//! store API ──► load() ──► CatalogStore ──► snapshot()/visible() ──► presentation
//!                              ▲    │
//!       Form Validator ──► create/edit/delete
//!                                   │
//!                                   └──► Notification channel
//! ```
//!
//! # Ownership
//!
//! The product collection is owned exclusively by the store. Readers
//! receive owned copies ([`CatalogStore::snapshot`]), never a live handle,
//! so no reader can observe a mutation in progress. Mutations are plain
//! `&mut self` calls and apply atomically with respect to the single
//! logical thread driving the store.
//!
//! # Usage
//!
//! ```no_run
//! use sf_catalog::CatalogStore;
//! use sf_client::StoreClient;
//! use sf_core::{Config, SearchState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = StoreClient::new(&config.client)?;
//! let mut store = CatalogStore::new(client, &config.store);
//!
//! store.load().await?;
//!
//! let visible = store.visible(&SearchState::new("shirt", "All"));
//! println!("{} matching products", visible.len());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod state;
pub mod store;

// Re-export error types
pub use error::CatalogError;

// Re-export the filter engine
pub use filter::{filter_products, ProductFilter};

// Re-export load state
pub use state::LoadState;

// Re-export the store
pub use store::CatalogStore;
