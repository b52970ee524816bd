//! The HTTP reachability probe.
//!
//! Form validation accepts an image URL only if a GET against it answers
//! with an OK-range status. This module provides [`HttpProbe`], the
//! production implementation of the [`UrlProbe`] trait.

use std::time::Duration;

use tracing::debug;

use sf_core::{ClientConfig, UrlProbe};

use crate::error::ClientError;

/// Probes URLs with a bounded GET request.
///
/// Every failure mode - DNS, connect, TLS, timeout - reads as "unreachable"
/// rather than an error, per the validation contract. The timeout comes
/// from [`ClientConfig::probe_timeout_ms`] so a dead host cannot stall form
/// submission indefinitely.
///
/// # Examples
///
/// ```no_run
/// use sf_client::HttpProbe;
/// use sf_core::{ClientConfig, UrlProbe};
///
/// # async fn example() -> Result<(), sf_client::ClientError> {
/// let probe = HttpProbe::new(&ClientConfig::default())?;
/// if probe.is_reachable("https://fakestoreapi.com/img/81fPKd-2AYL.jpg").await {
///     println!("image looks good");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpProbe {
    /// The underlying HTTP client, configured with the probe timeout.
    http: reqwest::Client,
}

impl HttpProbe {
    /// Creates a probe from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Init`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.probe_timeout_ms))
            .build()
            .map_err(ClientError::Init)?;

        Ok(Self { http })
    }
}

impl UrlProbe for HttpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                debug!(%url, status = %response.status(), reachable = ok, "Probed URL");
                ok
            }
            Err(error) => {
                debug!(%url, %error, "Reachability probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_construction_from_defaults() {
        assert!(HttpProbe::new(&ClientConfig::default()).is_ok());
    }
}
