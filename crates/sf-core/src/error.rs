//! Error types for the sf-core crate.
//!
//! This module provides the [`ConfigError`] type for configuration-related
//! errors that can occur across the workspace.

/// Errors that can occur during configuration validation and parsing.
///
/// # Examples
///
/// ```
/// use sf_core::ConfigError;
///
/// let error = ConfigError::invalid_option("base_url", "must not be empty");
/// assert!(error.to_string().contains("base_url"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// Failed to parse the configuration document.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[inline]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::invalid_option("notification_capacity", "must be positive");
        insta::assert_snapshot!(
            error.to_string(),
            @"invalid configuration option 'notification_capacity': must be positive"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = ConfigError::from(parse_err);
        assert!(error.to_string().contains("failed to parse configuration"));
    }
}
