//! Validation fields and the collected error map.

use std::fmt;

use serde::Serialize;

use sf_core::FxHashMap;

/// The draft fields that validation can reject.
///
/// # Examples
///
/// ```
/// use sf_validate::Field;
///
/// assert_eq!(Field::Title.as_str(), "title");
/// assert_eq!(Field::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The product title.
    Title,
    /// The product description.
    Description,
    /// The unit price.
    Price,
    /// The category selection.
    Category,
    /// The image URL.
    Image,
}

impl Field {
    /// Every field, in form display order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Price,
        Self::Category,
        Self::Image,
    ];

    /// Returns the field's form name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::Category => "category",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete set of field errors from one validation pass.
///
/// Validation is fully evaluated, so this map holds a message for every
/// failing field, letting the form render all of them at once. An empty map
/// means the draft passed.
///
/// # Examples
///
/// ```
/// use sf_validate::{Field, FieldErrors};
///
/// let mut errors = FieldErrors::default();
/// errors.insert(Field::Price, "Price must be greater than 0");
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.get(Field::Price), Some("Price must be greater than 0"));
/// assert!(errors.get(Field::Title).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    /// Message per failing field.
    errors: FxHashMap<Field, String>,
}

impl FieldErrors {
    /// Creates an empty error map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Returns the message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns `true` if the field failed.
    #[inline]
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns the number of failing fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no field failed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over failing fields in form display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    /// Converts the map into the validation result: `Ok(())` when empty.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_pass() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Category, "Please select a category");
        assert!(errors.contains(Field::Category));
        assert!(!errors.contains(Field::Image));
        assert_eq!(errors.get(Field::Category), Some("Please select a category"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_display_follows_form_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Image, "The URL is invalid or not reachable.");
        errors.insert(Field::Title, "Title must be at least 3 characters long");
        insta::assert_snapshot!(
            errors.to_string(),
            @"title: Title must be at least 3 characters long; image: The URL is invalid or not reachable."
        );
    }

    #[test]
    fn test_serializes_with_snake_case_keys() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Price, "Price must be greater than 0");
        let json = serde_json::to_string(&errors).unwrap();
        assert!(json.contains(r#""price""#));
    }
}
