//! Local validation errors.
//!
//! These are raised before a request is built, so no network call is made
//! when one of them is returned.

use thiserror::Error;

/// A precondition on caller input that failed locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An upload was requested with an empty file list.
    #[error("At least one file is required")]
    NoFiles,

    /// A required text field was empty after trimming.
    #[error("{field} is required")]
    MissingField {
        /// Name of the offending field, as shown to users.
        field: String,
    },

    /// An identifier cannot stand as a URL path segment.
    #[error("'{segment}' is not a valid identifier")]
    InvalidSegment {
        /// The rejected identifier.
        segment: String,
    },
}

impl ValidationError {
    /// Creates a missing-field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Checks that `value` is non-empty after trimming and returns the trimmed text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for blank input.
    pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(Self::missing(field))
        } else {
            Ok(trimmed)
        }
    }

    /// Checks that `segment` names a resource when placed in a URL path.
    ///
    /// Empty, `.` and `..` segments are collapsed by URL normalization and
    /// would address a different resource.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSegment`] for those values.
    pub fn require_segment(segment: &str) -> Result<(), Self> {
        if matches!(segment, "" | "." | "..") {
            Err(Self::InvalidSegment {
                segment: segment.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(ValidationError::require_text("Title", "  Hack Night ").unwrap(), "Hack Night");
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        let err = ValidationError::require_text("Title", " \t\n").unwrap_err();
        assert_eq!(err, ValidationError::missing("Title"));
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_require_segment() {
        assert!(ValidationError::require_segment("codezero").is_ok());
        assert!(ValidationError::require_segment("...").is_ok());
        for bad in ["", ".", ".."] {
            assert!(matches!(
                ValidationError::require_segment(bad),
                Err(ValidationError::InvalidSegment { .. })
            ));
        }
        assert_eq!(
            ValidationError::require_segment("..").unwrap_err().to_string(),
            "'..' is not a valid identifier"
        );
    }

    #[test]
    fn test_no_files_message() {
        assert_eq!(ValidationError::NoFiles.to_string(), "At least one file is required");
    }
}
