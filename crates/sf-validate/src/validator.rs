//! The draft validation rules.
//!
//! Each rule is independent and the whole set is always evaluated, so a
//! draft that fails everything reports all five messages at once. Rule
//! thresholds and messages deliberately match the original form behavior.

use sf_core::{ProductDraft, UrlProbe};

use crate::field::{Field, FieldErrors};

/// Message for a title shorter than 3 characters.
pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters long";

/// Message for a description outside the exclusive (10, 100) range.
pub const DESCRIPTION_OUT_OF_RANGE: &str = "Description must be between 10 and 100 characters";

/// Message for a non-positive price.
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";

/// Message for a missing category selection.
pub const CATEGORY_MISSING: &str = "Please select a category";

/// Message for an image URL with a bad scheme or that no probe can reach.
pub const IMAGE_UNREACHABLE: &str = "The URL is invalid or not reachable.";

/// Minimum accepted title length.
const TITLE_MIN: usize = 3;

/// Exclusive lower bound on description length.
const DESCRIPTION_MIN: usize = 10;

/// Exclusive upper bound on description length.
const DESCRIPTION_MAX: usize = 100;

/// Validates a draft, collecting every failing field.
///
/// The five rules are evaluated unconditionally except for the reachability
/// probe, which only runs when the image URL already carries an `https://`
/// scheme - a malformed scheme is a definitive failure with the same
/// message, so probing it would be wasted work.
///
/// Lengths are counted in characters, not bytes, so multi-byte titles
/// behave the way a user counting letters expects.
///
/// # Errors
///
/// Returns the complete [`FieldErrors`] map when any rule fails.
///
/// # Examples
///
/// ```
/// use sf_core::{ProductDraft, UrlProbe};
/// use sf_validate::{validate, Field, PRICE_NOT_POSITIVE};
///
/// struct Reachable;
///
/// impl UrlProbe for Reachable {
///     async fn is_reachable(&self, _url: &str) -> bool {
///         true
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let draft = ProductDraft {
///     title: "Widget".to_owned(),
///     description: "A thoroughly adequate widget for most purposes.".to_owned(),
///     price: 0.0,
///     category: "tools".to_owned(),
///     image: "https://img.example/widget.png".to_owned(),
/// };
///
/// let errors = validate(&draft, &Reachable).await.unwrap_err();
/// assert_eq!(errors.get(Field::Price), Some(PRICE_NOT_POSITIVE));
/// assert_eq!(errors.len(), 1);
/// # }
/// ```
pub async fn validate<P: UrlProbe>(draft: &ProductDraft, probe: &P) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.title.chars().count() < TITLE_MIN {
        errors.insert(Field::Title, TITLE_TOO_SHORT);
    }

    let description_len = draft.description.chars().count();
    if description_len <= DESCRIPTION_MIN || description_len >= DESCRIPTION_MAX {
        errors.insert(Field::Description, DESCRIPTION_OUT_OF_RANGE);
    }

    if draft.price <= 0.0 || draft.price.is_nan() {
        errors.insert(Field::Price, PRICE_NOT_POSITIVE);
    }

    if draft.category.is_empty() {
        errors.insert(Field::Category, CATEGORY_MISSING);
    }

    if !has_https_scheme(&draft.image) {
        errors.insert(Field::Image, IMAGE_UNREACHABLE);
    } else if !probe.is_reachable(&draft.image).await {
        errors.insert(Field::Image, IMAGE_UNREACHABLE);
    }

    errors.into_result()
}

/// Returns `true` if the URL starts with the required `https://` scheme.
fn has_https_scheme(url: &str) -> bool {
    url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A probe with a canned answer.
    struct StaticProbe(bool);

    impl UrlProbe for StaticProbe {
        async fn is_reachable(&self, _url: &str) -> bool {
            self.0
        }
    }

    /// A probe that must never be consulted.
    struct UnreachedProbe;

    impl UrlProbe for UnreachedProbe {
        async fn is_reachable(&self, url: &str) -> bool {
            panic!("probe should not be consulted for {url}");
        }
    }

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Widget".to_owned(),
            description: "A".repeat(50),
            price: 9.99,
            category: "tools".to_owned(),
            image: "https://img.example/widget.png".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_valid_draft_passes() {
        let result = validate(&valid_draft(), &StaticProbe(true)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_everything_wrong_reports_all_five() {
        let draft = ProductDraft {
            title: "AB".to_owned(),
            description: "short".to_owned(),
            price: 0.0,
            category: String::new(),
            image: "http://x.com".to_owned(),
        };

        let errors = validate(&draft, &UnreachedProbe).await.unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::Title), Some(TITLE_TOO_SHORT));
        assert_eq!(errors.get(Field::Description), Some(DESCRIPTION_OUT_OF_RANGE));
        assert_eq!(errors.get(Field::Price), Some(PRICE_NOT_POSITIVE));
        assert_eq!(errors.get(Field::Category), Some(CATEGORY_MISSING));
        assert_eq!(errors.get(Field::Image), Some(IMAGE_UNREACHABLE));
    }

    #[tokio::test]
    async fn test_title_boundary() {
        let mut draft = valid_draft();
        draft.title = "AB".to_owned();
        let errors = validate(&draft, &StaticProbe(true)).await.unwrap_err();
        assert!(errors.contains(Field::Title));

        draft.title = "ABC".to_owned();
        assert!(validate(&draft, &StaticProbe(true)).await.is_ok());
    }

    #[tokio::test]
    async fn test_description_bounds_are_exclusive() {
        let mut draft = valid_draft();

        draft.description = "A".repeat(10);
        let errors = validate(&draft, &StaticProbe(true)).await.unwrap_err();
        assert!(errors.contains(Field::Description));

        draft.description = "A".repeat(100);
        let errors = validate(&draft, &StaticProbe(true)).await.unwrap_err();
        assert!(errors.contains(Field::Description));

        draft.description = "A".repeat(11);
        assert!(validate(&draft, &StaticProbe(true)).await.is_ok());

        draft.description = "A".repeat(99);
        assert!(validate(&draft, &StaticProbe(true)).await.is_ok());
    }

    #[tokio::test]
    async fn test_price_must_be_positive() {
        let mut draft = valid_draft();

        draft.price = -1.0;
        let errors = validate(&draft, &StaticProbe(true)).await.unwrap_err();
        assert!(errors.contains(Field::Price));

        draft.price = f64::NAN;
        let errors = validate(&draft, &StaticProbe(true)).await.unwrap_err();
        assert!(errors.contains(Field::Price));

        draft.price = 0.01;
        assert!(validate(&draft, &StaticProbe(true)).await.is_ok());
    }

    #[tokio::test]
    async fn test_bad_scheme_skips_the_probe() {
        let mut draft = valid_draft();
        draft.image = "http://img.example/widget.png".to_owned();

        // UnreachedProbe panics if consulted; only the scheme rule fires.
        let errors = validate(&draft, &UnreachedProbe).await.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Image), Some(IMAGE_UNREACHABLE));
    }

    #[tokio::test]
    async fn test_empty_image_fails_without_probe() {
        let mut draft = valid_draft();
        draft.image = String::new();
        let errors = validate(&draft, &UnreachedProbe).await.unwrap_err();
        assert!(errors.contains(Field::Image));
    }

    #[tokio::test]
    async fn test_unreachable_image_fails() {
        let errors = validate(&valid_draft(), &StaticProbe(false)).await.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Image), Some(IMAGE_UNREACHABLE));
    }

    #[tokio::test]
    async fn test_unicode_lengths_count_characters() {
        let mut draft = valid_draft();
        draft.title = "héé".to_owned();
        assert!(validate(&draft, &StaticProbe(true)).await.is_ok());
    }
}
