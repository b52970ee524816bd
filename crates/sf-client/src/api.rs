//! The store API client.
//!
//! This module provides [`StoreClient`], a thin typed wrapper over the store
//! API's two read endpoints:
//!
//! - `GET /products` - the full product list
//! - `GET /products/categories` - the known category names
//!
//! Neither endpoint requires authentication, and there is no pagination or
//! server-side filtering; the catalog store fetches everything once and all
//! further work happens in memory.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use sf_core::{ClientConfig, Product};

use crate::error::ClientError;

/// A typed client for the remote store API.
///
/// The client is cheap to clone (the underlying `reqwest::Client` is a
/// handle around a shared connection pool) and all of its methods borrow
/// `&self`, so one instance can serve the whole session.
///
/// # Examples
///
/// ```no_run
/// use sf_client::StoreClient;
/// use sf_core::ClientConfig;
///
/// # async fn example() -> Result<(), sf_client::ClientError> {
/// let client = StoreClient::new(&ClientConfig::default())?;
/// let products = client.fetch_products().await?;
/// let categories = client.fetch_categories().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StoreClient {
    /// The underlying HTTP client, configured with the request timeout.
    http: reqwest::Client,

    /// Base URL of the store API, without a trailing slash.
    base_url: String,
}

impl StoreClient {
    /// Creates a client from the given configuration.
    ///
    /// A trailing slash on the configured base URL is tolerated and
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Init`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(ClientError::Init)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full product list.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, or JSON decode failure is
    /// surfaced as a [`ClientError`].
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        self.get_json("products").await
    }

    /// Fetches the category names known to the store API.
    ///
    /// The synthetic wildcard category is not part of this list; the catalog
    /// store injects it when building the selector feed.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, or JSON decode failure is
    /// surfaced as a [`ClientError`].
    pub async fn fetch_categories(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("products/categories").await
    }

    /// Builds the absolute URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Performs a GET request and decodes the JSON response body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path);
        debug!(%url, "Fetching from store API");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status, url });
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }
}
