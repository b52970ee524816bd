//! Configuration structures for the storefront catalog.
//!
//! This module provides configuration types for all components of the engine:
//!
//! - [`ClientConfig`] - Store API client settings (base URL, timeouts)
//! - [`SearchConfig`] - Search pipeline settings (debounce window)
//! - [`StoreConfig`] - Catalog store settings (notification channel capacity)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with values matching the
//! public fake store API, and deserialize leniently via `#[serde(default)]`
//! so embedders only specify the fields they care about.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the store API client.
///
/// Controls where product data is fetched from and how long requests may run.
///
/// # Examples
///
/// ```
/// use sf_core::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.base_url, "https://fakestoreapi.com");
/// assert_eq!(config.request_timeout_ms, 30_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the store API, without a trailing slash.
    pub base_url: String,

    /// Timeout for product and category fetches, in milliseconds.
    pub request_timeout_ms: u64,

    /// Timeout for the image reachability probe, in milliseconds.
    ///
    /// The probe treats a timeout as "unreachable" rather than an error,
    /// so this bounds how long form validation can stall on a dead host.
    pub probe_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fakestoreapi.com".to_owned(),
            request_timeout_ms: 30_000,
            probe_timeout_ms: 10_000,
        }
    }
}

/// Configuration for the search pipeline.
///
/// Controls how keystrokes are coalesced before the query takes effect.
///
/// # Examples
///
/// ```
/// use sf_core::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.debounce_ms, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Debounce window in milliseconds.
    ///
    /// Multiple query updates within this window collapse into a single
    /// search. A window of zero still defers the search to the next
    /// scheduling opportunity rather than firing synchronously.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 100 }
    }
}

/// Configuration for the catalog store.
///
/// # Examples
///
/// ```
/// use sf_core::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.notification_capacity, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the bounded notification channel.
    ///
    /// Notifications beyond this backlog are dropped rather than blocking
    /// a store mutation.
    pub notification_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            notification_capacity: 100,
        }
    }
}

/// Root configuration for the storefront catalog.
///
/// Combines all component configurations into a single structure that can be
/// loaded from a JSON document or constructed programmatically.
///
/// # Examples
///
/// ```
/// use sf_core::Config;
///
/// let config = Config::default();
/// assert!(config.validate().is_ok());
///
/// let parsed = Config::from_json(r#"{"search": {"debounce_ms": 250}}"#).unwrap();
/// assert_eq!(parsed.search.debounce_ms, 250);
/// assert_eq!(parsed.client.base_url, "https://fakestoreapi.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store API client configuration.
    pub client: ClientConfig,

    /// Search pipeline configuration.
    pub search: SearchConfig,

    /// Catalog store configuration.
    pub store: StoreConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults. The parsed configuration
    /// is validated before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON, or
    /// [`ConfigError::InvalidOption`] if a parsed value fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if:
    ///
    /// - the base URL is empty or does not use an `http`/`https` scheme
    /// - the notification channel capacity is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.base_url.is_empty() {
            return Err(ConfigError::invalid_option(
                "client.base_url",
                "must not be empty",
            ));
        }
        if !self.client.base_url.starts_with("http://")
            && !self.client.base_url.starts_with("https://")
        {
            return Err(ConfigError::invalid_option(
                "client.base_url",
                "must use an http or https scheme",
            ));
        }
        if self.store.notification_capacity == 0 {
            return Err(ConfigError::invalid_option(
                "store.notification_capacity",
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.probe_timeout_ms, 10_000);
    }

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce_ms, 100);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"client": {"base_url": "https://store.example"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.client.base_url, "https://store.example");
        // Other fields should have defaults
        assert_eq!(config.client.request_timeout_ms, 30_000);
        assert_eq!(config.search.debounce_ms, 100);
        assert_eq!(config.store.notification_capacity, 100);
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.client.base_url = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("client.base_url"));
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut config = Config::default();
        config.client.base_url = "ftp://store.example".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut config = Config::default();
        config.store.notification_capacity = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("notification_capacity"));
    }

    #[test]
    fn test_from_json_rejects_invalid_document() {
        assert!(Config::from_json("{not json").is_err());
    }

    #[test]
    fn test_from_json_validates_parsed_values() {
        let result = Config::from_json(r#"{"store": {"notification_capacity": 0}}"#);
        assert!(result.is_err());
    }
}
