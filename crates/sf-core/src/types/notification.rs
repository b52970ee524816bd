//! Mutation notifications for the presentation layer.
//!
//! Each successful catalog mutation emits a [`Notification`] describing what
//! happened, for the presentation layer to render as a transient alert.
//! Notifications are an observable side effect, not required for data
//! correctness: the store drops them rather than letting a slow consumer
//! block a mutation.

use serde::{Deserialize, Serialize};

/// The kind of mutation a notification reports.
///
/// # Examples
///
/// ```
/// use sf_core::NotificationKind;
///
/// assert!(NotificationKind::Deleted.is_destructive());
/// assert!(!NotificationKind::Created.is_destructive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum NotificationKind {
    /// A product was created locally.
    Created,

    /// An existing product was edited.
    Updated,

    /// A product was removed.
    Deleted,
}

impl NotificationKind {
    /// Returns `true` if alerts for this kind should render with the
    /// destructive styling.
    #[inline]
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Returns the alert headline for this kind.
    #[inline]
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Created => "Product Created",
            Self::Updated => "Product Updated",
            Self::Deleted => "Product Deleted",
        }
    }

    /// Returns the verb used in the alert body.
    const fn verb(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// A notification emitted by the catalog store after a successful mutation.
///
/// # Examples
///
/// ```
/// use sf_core::{Notification, NotificationKind};
///
/// let note = Notification::new(NotificationKind::Updated, "Backpack");
/// assert_eq!(note.headline(), "Product Updated");
/// assert_eq!(note.message(), "Backpack has been successfully updated.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// What happened.
    pub kind: NotificationKind,

    /// Title of the product the mutation touched.
    pub product_title: String,
}

impl Notification {
    /// Creates a notification for the given mutation kind and product title.
    #[inline]
    #[must_use]
    pub fn new(kind: NotificationKind, product_title: impl Into<String>) -> Self {
        Self {
            kind,
            product_title: product_title.into(),
        }
    }

    /// Returns the alert headline, e.g. `"Product Created"`.
    #[inline]
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        self.kind.headline()
    }

    /// Returns the alert body, e.g. `"Widget has been successfully created."`.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "{} has been successfully {}.",
            self.product_title,
            self.kind.verb()
        )
    }
}
