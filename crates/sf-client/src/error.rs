//! Error types for the sf-client crate.
//!
//! This module provides the [`ClientError`] type for failures while talking
//! to the remote store API.
//!
//! # Error Recovery Strategy
//!
//! - **Init** ([`ClientError::Init`]): fatal - the HTTP client could not be
//!   constructed, nothing will work
//! - **Http** ([`ClientError::Http`]): the request never produced a
//!   response; the catalog store shows its errored state and the caller may
//!   retry by re-invoking `load()`
//! - **Status** ([`ClientError::Status`]): the API answered with a
//!   non-success status; handled the same way as a transport failure
//! - **Decode** ([`ClientError::Decode`]): the response body was not the
//!   expected JSON shape
//!
//! None of these abort the process; every load failure becomes a
//! user-visible error state.

/// Errors that can occur while fetching from the store API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to initialize HTTP client: {0}")]
    Init(#[source] reqwest::Error),

    /// The request failed before a response arrived (DNS, connect, timeout).
    #[error("request to {url} failed: {source}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("store API returned {status} for {url}")]
    Status {
        /// The response status code.
        status: reqwest::StatusCode,
        /// The URL that was requested.
        url: String,
    },

    /// The response body could not be decoded as the expected JSON.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The URL that was requested.
        url: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Returns the response status code, if the API answered at all.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Init(_) | Self::Http { .. } | Self::Decode { .. } => None,
        }
    }

    /// Returns the requested URL, if this error is tied to a request.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Http { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                Some(url)
            }
            Self::Init(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://fakestoreapi.com/products".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/products"));
    }

    #[test]
    fn test_status_accessor() {
        let err = ClientError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://fakestoreapi.com/products".to_owned(),
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.url(), Some("https://fakestoreapi.com/products"));
    }
}
