//! # Configuration Model
//!
//! The validated, in-memory unit of work: placement count, width, height and
//! the ordered override rows the operator is editing.
//!
//! ```rust
//! use adgen_core::model::{ConfigurationModel, RawConfiguration};
//!
//! let raw = RawConfiguration::new("2", "300", "250").with_override("bidfloor", "0.5");
//! let model = ConfigurationModel::validate(&raw).expect("valid input");
//! assert_eq!(model.placement_count(), 2);
//! ```

pub mod errors;
pub mod types;
pub mod validation;

pub use errors::{Field, ValidationError, ValidationErrors, ValidationReason};
pub use types::{
    ConfigurationModel, DEFAULT_HEIGHT, DEFAULT_PLACEMENT_COUNT, DEFAULT_WIDTH,
    MAX_PLACEMENT_COUNT, OverrideEntry, Overrides, RawConfiguration, RawValue,
};
pub use validation::{coerce_integer, validate, validate_field};
