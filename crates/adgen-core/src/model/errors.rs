use std::fmt;

use serde::Serialize;

use crate::errors::AdgenError;

/// Numeric field of a configuration that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PlacementCount,
    Width,
    Height,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PlacementCount => "placement_count",
            Field::Width => "width",
            Field::Height => "height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationReason {
    #[error("a value is required")]
    Missing,

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("'{input}' is not a whole number")]
    NotAWholeNumber { input: String },

    #[error("must be at least {min}")]
    BelowMinimum { min: i64 },

    #[error("must be at most {max}")]
    AboveMaximum { max: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: Field, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

impl AdgenError for ValidationError {
    fn error_code(&self) -> &'static str {
        "INVALID_FIELD"
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// Every field error found in one validation pass, in field order.
///
/// Never empty: a pass with no errors produces a model instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub(crate) fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Offending fields, in the order they were checked.
    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|e| e.field).collect()
    }

    pub fn for_field(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl AdgenError for ValidationErrors {
    fn error_code(&self) -> &'static str {
        "VALIDATION_FAILED"
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
