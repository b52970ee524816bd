//! The load lifecycle of the catalog store.

use serde::{Deserialize, Serialize};

/// The state of the catalog store's initial load.
///
/// The store starts [`Idle`](Self::Idle), enters
/// [`Loading`](Self::Loading) while the fetch is in flight, and lands in
/// either [`Ready`](Self::Ready) or [`Errored`](Self::Errored). There is no
/// automatic retry: a failed store stays errored until `load()` is invoked
/// again, which is also how a caller implements manual retry.
///
/// # Examples
///
/// ```
/// use sf_catalog::LoadState;
///
/// let state = LoadState::Errored("request timed out".to_owned());
/// assert!(state.is_errored());
/// assert_eq!(state.error_message(), Some("request timed out"));
/// assert!(!state.is_ready());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum LoadState {
    /// `load()` has not been invoked yet.
    #[default]
    Idle,

    /// A load is in flight.
    Loading,

    /// The collection holds the fetched products.
    Ready,

    /// The load failed; holds a descriptive message for display.
    Errored(String),
}

impl LoadState {
    /// Returns `true` if the store holds loaded products.
    #[inline]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns `true` if a load is in flight.
    #[inline]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if the last load failed.
    #[inline]
    #[must_use]
    pub const fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }

    /// Returns the failure message, if the last load failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message),
            Self::Idle | Self::Loading | Self::Ready => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
    }

    #[test]
    fn test_predicates() {
        assert!(LoadState::Ready.is_ready());
        assert!(LoadState::Loading.is_loading());
        assert!(LoadState::Errored("boom".to_owned()).is_errored());
        assert!(!LoadState::Idle.is_ready());
        assert_eq!(LoadState::Ready.error_message(), None);
    }

    #[test]
    fn test_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&LoadState::Idle).unwrap(), r#""idle""#);
        assert_eq!(
            serde_json::to_string(&LoadState::Loading).unwrap(),
            r#""loading""#
        );
    }
}
