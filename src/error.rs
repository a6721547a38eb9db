//! Error handling module for careerpath
//!
//! The recommendation engine itself is total and never returns an error.
//! These types cover everything around it: reading profile files and
//! validating the numeric questionnaire answers.

use thiserror::Error;

/// Main error type for careerpath
#[derive(Error, Debug)]
pub enum CareerPathError {
    /// IO errors (reading or writing profile files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A profile field is outside its accepted range
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Validation errors (command-line input, catalog lookups)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for careerpath operations
pub type Result<T> = std::result::Result<T, CareerPathError>;

impl CareerPathError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Field-level validation failures for a [`crate::Profile`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("gpa must be between {min} and {max}, got {value}")]
    GpaOutOfRange { value: u8, min: u8, max: u8 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    PreferenceOutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CareerPathError::validation("unknown education level");
        assert_eq!(err.to_string(), "Validation error: unknown education level");

        let err = ProfileError::GpaOutOfRange { value: 12, min: 40, max: 100 };
        assert_eq!(err.to_string(), "gpa must be between 40 and 100, got 12");
    }

    #[test]
    fn test_profile_error_conversion() {
        let err: CareerPathError = ProfileError::PreferenceOutOfRange {
            field: "workStyle",
            value: 0,
            min: 1,
            max: 10,
        }
        .into();
        assert!(matches!(err, CareerPathError::Profile(_)));
        assert_eq!(
            err.to_string(),
            "Profile error: workStyle must be between 1 and 10, got 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CareerPathError = io_err.into();
        assert!(matches!(err, CareerPathError::Io(_)));
    }
}
