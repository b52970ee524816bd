//! Core types, errors, and configuration for the storefront catalog.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types (`Product`, `ProductDraft`, `SearchState`, `Notification`)
//! - Configuration structures with serde defaults
//! - The [`ConfigError`] type for configuration validation failures
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)
//! - The [`UrlProbe`] trait implemented by the HTTP client crate
//!
//! # Crate Dependencies
//!
//! ```text
//! sf-catalog ──► sf-client ──► sf-core
//! sf-search  ─────────────────────►
//! sf-validate ────────────────────►
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod probe;
pub mod types;

// Re-export configuration types
pub use config::{ClientConfig, Config, SearchConfig, StoreConfig};

// Re-export error types
pub use error::ConfigError;

// Re-export hash aliases
pub use hash::{FxHashMap, FxHashSet};

// Re-export the probe trait
pub use probe::UrlProbe;

// Re-export domain types
pub use types::{
    Notification, NotificationKind, Product, ProductDraft, ProductId, SearchState,
    WILDCARD_CATEGORY,
};
