//! Request Validation Module
//!
//! Field-level validation for incoming requests.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Maximum characters in a chat message
pub const MAX_MESSAGE_CHARS: usize = 2_000;

/// Validation error types
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    #[error("Field '{field}' is too long (max: {max}, got: {got})")]
    TooLong {
        field: String,
        max: usize,
        got: usize,
    },

    #[error("Field '{field}' is too short (min: {min}, got: {got})")]
    TooShort {
        field: String,
        min: usize,
        got: usize,
    },

    #[error("Field '{field}' is not a valid email: {value}")]
    InvalidEmail { field: String, value: String },

    #[error("Field '{field}' exceeds maximum value: max={max}, got={got}")]
    ExceedsMax { field: String, max: i64, got: i64 },

    #[error("Custom validation failed: {message}")]
    Custom { field: String, message: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } => field.as_str(),
            Self::TooLong { field, .. } => field.as_str(),
            Self::TooShort { field, .. } => field.as_str(),
            Self::InvalidEmail { field, .. } => field.as_str(),
            Self::ExceedsMax { field, .. } => field.as_str(),
            Self::Custom { field, .. } => field.as_str(),
        }
    }
}

/// Validation result type
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Request validator implementation
#[derive(Debug, Clone)]
pub struct RequestValidator {
    /// Maximum allowed field length
    max_field_length: usize,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestValidator {
    pub fn new() -> Self {
        Self {
            max_field_length: 10_000,
        }
    }

    /// Validate field length, counted in characters
    pub fn validate_length(
        &self,
        field: &str,
        value: &str,
        min: Option<usize>,
        max: Option<usize>,
    ) -> ValidationResult<()> {
        let length = value.chars().count();

        if let Some(min_len) = min {
            if length < min_len {
                return Err(ValidationError::TooShort {
                    field: field.to_string(),
                    min: min_len,
                    got: length,
                });
            }
        }

        let max_len = max.unwrap_or(self.max_field_length);
        if length > max_len {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max: max_len,
                got: length,
            });
        }

        Ok(())
    }

    /// Validate email format
    pub fn validate_email(&self, field: &str, value: &str) -> ValidationResult<()> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
    }

    /// Remove null bytes and control characters
    pub fn sanitize_string(input: &str) -> String {
        input
            .trim()
            .chars()
            .filter(|c| !c.is_ascii_control() || c.is_whitespace())
            .collect()
    }
}

/// Common validation helpers
pub mod validators {
    use super::*;

    /// Validate a chat message: non-blank, bounded length
    pub fn validate_chat_message(message: &str) -> ValidationResult<()> {
        if message.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "message".to_string(),
            });
        }
        RequestValidator::new().validate_length("message", message, None, Some(MAX_MESSAGE_CHARS))
    }
}
