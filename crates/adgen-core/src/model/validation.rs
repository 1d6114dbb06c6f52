//! Configuration input validation
//!
//! Coerces raw numeric input to integers and range-checks every field in one
//! pass, so callers get the whole error set at once.

use crate::model::errors::{Field, ValidationError, ValidationErrors, ValidationReason};
use crate::model::types::{
    ConfigurationModel, MAX_PLACEMENT_COUNT, Overrides, RawConfiguration, RawValue,
};

impl Field {
    /// Inclusive bounds for the field.
    pub fn bounds(&self) -> (i64, i64) {
        match self {
            Field::PlacementCount => (1, i64::from(MAX_PLACEMENT_COUNT)),
            Field::Width | Field::Height => (1, i64::from(u32::MAX)),
        }
    }
}

/// Validate raw input into a model.
///
/// All three numeric fields are checked even when an earlier one fails.
/// Override rows are taken as-is; rows with empty keys are kept for editing
/// and filtered out later by the consumers.
pub fn validate(raw: &RawConfiguration) -> Result<ConfigurationModel, ValidationErrors> {
    let placement_count = validate_field(Field::PlacementCount, raw.placement_count.as_ref());
    let width = validate_field(Field::Width, raw.width.as_ref());
    let height = validate_field(Field::Height, raw.height.as_ref());

    let errors: Vec<ValidationError> = [&placement_count, &width, &height]
        .into_iter()
        .filter_map(|r| r.as_ref().err().cloned())
        .collect();
    if let Some(errors) = ValidationErrors::from_vec(errors) {
        tracing::debug!(
            event = "core.model.validate_failed",
            error_count = errors.len()
        );
        return Err(errors);
    }

    let model = ConfigurationModel::from_parts(
        placement_count?,
        width?,
        height?,
        Overrides::from(raw.overrides.clone()),
    );
    tracing::debug!(
        event = "core.model.validate_completed",
        placement_count = model.placement_count(),
        width = model.width(),
        height = model.height(),
        overrides = model.overrides().len()
    );
    Ok(model)
}

/// Coerce and range-check a single field.
pub fn validate_field(field: Field, raw: Option<&RawValue>) -> Result<u32, ValidationError> {
    let raw = raw.ok_or(ValidationError::new(field, ValidationReason::Missing))?;
    let value = coerce_integer(raw)
        .map_err(|reason| ValidationError::new(field, reason))?;
    check_range(field, value)
}

fn check_range(field: Field, value: i64) -> Result<u32, ValidationError> {
    let (min, max) = field.bounds();
    if value < min {
        return Err(ValidationError::new(field, ValidationReason::BelowMinimum { min }));
    }
    if value > max {
        return Err(ValidationError::new(field, ValidationReason::AboveMaximum { max }));
    }
    u32::try_from(value).map_err(|_| ValidationError::new(field, ValidationReason::Missing))
}

/// Turn numeric-looking input into an integer.
///
/// Text is trimmed. Fractional values are rejected rather than rounded, and
/// `1.0`-style input is accepted as the integer it denotes.
pub fn coerce_integer(raw: &RawValue) -> Result<i64, ValidationReason> {
    match raw {
        RawValue::Integer(v) => Ok(*v),
        RawValue::Float(v) => float_to_integer(*v, &raw.to_string()),
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(ValidationReason::Missing);
            }
            if let Ok(v) = trimmed.parse::<i64>() {
                return Ok(v);
            }
            match trimmed.parse::<f64>() {
                Ok(v) => float_to_integer(v, trimmed),
                Err(_) => Err(ValidationReason::NotANumber {
                    input: trimmed.to_string(),
                }),
            }
        }
    }
}

fn float_to_integer(value: f64, input: &str) -> Result<i64, ValidationReason> {
    if !value.is_finite() {
        return Err(ValidationReason::NotANumber {
            input: input.to_string(),
        });
    }
    if value.fract() != 0.0 {
        return Err(ValidationReason::NotAWholeNumber {
            input: input.to_string(),
        });
    }
    // Saturating cast; the range check rejects anything this large.
    Ok(value as i64)
}

impl ConfigurationModel {
    /// Validate raw input into a model.
    ///
    /// See [`validate`] for details.
    pub fn validate(raw: &RawConfiguration) -> Result<Self, ValidationErrors> {
        validate(raw)
    }

    /// Change the placement count; the model is untouched on failure.
    pub fn set_placement_count(&mut self, raw: impl Into<RawValue>) -> Result<(), ValidationError> {
        let value = validate_field(Field::PlacementCount, Some(&raw.into()))?;
        self.set_placement_count_unchecked(value);
        Ok(())
    }

    /// Change the width; the model is untouched on failure.
    pub fn set_width(&mut self, raw: impl Into<RawValue>) -> Result<(), ValidationError> {
        let value = validate_field(Field::Width, Some(&raw.into()))?;
        self.set_width_unchecked(value);
        Ok(())
    }

    /// Change the height; the model is untouched on failure.
    pub fn set_height(&mut self, raw: impl Into<RawValue>) -> Result<(), ValidationError> {
        let value = validate_field(Field::Height, Some(&raw.into()))?;
        self.set_height_unchecked(value);
        Ok(())
    }
}
