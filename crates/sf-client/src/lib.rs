//! HTTP client for the remote store API.
//!
//! This crate is the only part of the workspace that talks to the network.
//! It provides:
//!
//! - [`StoreClient`] - fetches the product list and the category list from
//!   the store API (`GET /products`, `GET /products/categories`)
//! - [`HttpProbe`] - the production [`UrlProbe`](sf_core::UrlProbe)
//!   implementation used by form validation to confirm an image URL answers
//! - [`ClientError`] - typed failures for transport, status, and decode
//!   problems
//!
//! # Error Posture
//!
//! Catalog fetches surface every failure as a [`ClientError`] so the store
//! can enter its errored state. The reachability probe is different by
//! contract: transport failures fold into "unreachable" (`false`) because an
//! unanswerable image URL is a validation outcome, not a fault.
//!
//! # Usage
//!
//! ```no_run
//! use sf_client::StoreClient;
//! use sf_core::ClientConfig;
//!
//! # async fn example() -> Result<(), sf_client::ClientError> {
//! let client = StoreClient::new(&ClientConfig::default())?;
//! let products = client.fetch_products().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod probe;

// Re-export client types
pub use api::StoreClient;

// Re-export error types
pub use error::ClientError;

// Re-export the probe implementation
pub use probe::HttpProbe;
