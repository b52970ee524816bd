//! Debounced search pipeline with async state streaming.
//!
//! This crate provides the temporal half of the catalog's search feature:
//! keystrokes arrive far faster than anyone wants to re-filter a product
//! list, so query updates are coalesced through a debounce window before
//! they take effect, while category selection applies immediately.
//!
//! # Components
//!
//! - [`Debouncer`] - a generic coalesce-bursts, fire-on-quiescence gate over
//!   a tokio timer. Each trigger supersedes the previous pending call; only
//!   the last value in a burst is ever delivered.
//! - [`SearchPipeline`] - owns the canonical
//!   [`SearchState`](sf_core::SearchState) and streams a snapshot to the
//!   consumer after every effective change.
//!
//! # Architecture
//!
//! ```text
//! set_query ──► Debouncer ──► (window elapses) ──┐
//!                                                ▼
//! set_category ───────────────────────────► pipeline task ──► recv()
//!                                          (owns SearchState,
//!                                           emits snapshots)
//! ```
//!
//! Keeping the canonical state inside one task means a debounced query that
//! fires after a category change observes the new category; there is no
//! second copy to fall out of sync.
//!
//! # Usage
//!
//! ```no_run
//! use sf_core::SearchConfig;
//! use sf_search::SearchPipeline;
//!
//! # async fn example() {
//! let mut pipeline = SearchPipeline::new(&SearchConfig::default());
//!
//! pipeline.set_category("electronics");
//! pipeline.set_query("monitor");
//!
//! while let Some(state) = pipeline.recv().await {
//!     println!("filter with {:?}", state);
//! }
//! # }
//! ```
//!
//! # Teardown
//!
//! Dropping either component cancels any pending debounced call and stops
//! its background task; nothing can fire after disposal.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod debounce;
pub mod pipeline;

// Re-export the debouncer
pub use debounce::Debouncer;

// Re-export the pipeline
pub use pipeline::SearchPipeline;
