//! The URL reachability probe trait.
//!
//! Form validation checks that a product's image URL actually answers with a
//! success status before the draft is committed. The check is a network
//! operation, so it lives behind a trait: the production implementation is
//! the HTTP probe in `sf-client`, while tests substitute fakes with canned
//! answers.

use std::future::Future;

/// A probe that reports whether a URL answers with a success response.
///
/// Implementations must fold every transport-level failure (DNS, connect,
/// timeout) into `false` rather than surfacing an error: an unreachable
/// image URL is a validation outcome, not a fault.
///
/// # Examples
///
/// ```
/// use sf_core::UrlProbe;
///
/// struct AlwaysReachable;
///
/// impl UrlProbe for AlwaysReachable {
///     async fn is_reachable(&self, _url: &str) -> bool {
///         true
///     }
/// }
/// ```
pub trait UrlProbe: Send + Sync {
    /// Returns `true` if a GET of `url` answers with an OK-range status.
    fn is_reachable(&self, url: &str) -> impl Future<Output = bool> + Send;
}
