//! Form validation for candidate product drafts.
//!
//! A [`ProductDraft`](sf_core::ProductDraft) must pass five independent
//! checks before the catalog store accepts it:
//!
//! | Field       | Rule                                                |
//! |-------------|-----------------------------------------------------|
//! | title       | at least 3 characters                               |
//! | description | strictly between 10 and 100 characters (exclusive)  |
//! | price       | greater than 0                                      |
//! | category    | selected (non-empty)                                |
//! | image       | `https://` scheme AND answers the reachability probe|
//!
//! Validation is fully evaluated: every failing field is reported at once in
//! a [`FieldErrors`] map so the form can render all messages together, not
//! just the first. The reachability probe is the only asynchronous check and
//! is consulted only when the scheme check passes; its failure shares the
//! image field's single message with a malformed scheme, per the original
//! behavior.
//!
//! # Example
//!
//! ```
//! use sf_core::{ProductDraft, UrlProbe};
//! use sf_validate::{validate, Field};
//!
//! struct OfflineProbe;
//!
//! impl UrlProbe for OfflineProbe {
//!     async fn is_reachable(&self, _url: &str) -> bool {
//!         true
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let draft = ProductDraft {
//!     title: "AB".to_owned(),
//!     ..ProductDraft::default()
//! };
//!
//! let errors = validate(&draft, &OfflineProbe).await.unwrap_err();
//! assert!(errors.contains(Field::Title));
//! # }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod field;
pub mod validator;

// Re-export field types
pub use field::{Field, FieldErrors};

// Re-export the validation entry point and rule messages
pub use validator::{
    validate, CATEGORY_MISSING, DESCRIPTION_OUT_OF_RANGE, IMAGE_UNREACHABLE, PRICE_NOT_POSITIVE,
    TITLE_TOO_SHORT,
};
