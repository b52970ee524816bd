//! Search and filter state.

use serde::{Deserialize, Serialize};

/// The synthetic category meaning "no category filter".
///
/// Never returned by the store API; injected at the head of the category
/// selector feed.
pub const WILDCARD_CATEGORY: &str = "All";

/// The current search query and category selection.
///
/// Owned by the search pipeline (the headless stand-in for the top-level
/// view) and mutated only through its setters; readers receive snapshots.
///
/// # Examples
///
/// ```
/// use sf_core::{SearchState, WILDCARD_CATEGORY};
///
/// let state = SearchState::default();
/// assert_eq!(state.query, "");
/// assert_eq!(state.category, WILDCARD_CATEGORY);
/// assert!(state.is_unfiltered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    /// The free-text search query. Empty matches everything.
    pub query: String,

    /// The selected category, or [`WILDCARD_CATEGORY`].
    pub category: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: WILDCARD_CATEGORY.to_owned(),
        }
    }
}

impl SearchState {
    /// Creates a search state with the given query and category.
    #[inline]
    #[must_use]
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Returns `true` if this state filters nothing out.
    #[inline]
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category == WILDCARD_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_unfiltered() {
        assert!(SearchState::default().is_unfiltered());
    }

    #[test]
    fn test_query_or_category_makes_state_filtered() {
        assert!(!SearchState::new("shirt", WILDCARD_CATEGORY).is_unfiltered());
        assert!(!SearchState::new("", "electronics").is_unfiltered());
    }
}
