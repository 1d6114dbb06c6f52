use crate::errors::AdgenError;
use crate::model::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("Invalid preset name: cannot be empty")]
    InvalidName,

    #[error("Preset '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("Failed to save presets: {message}")]
    SaveFailed { message: String },

    #[error("Presets file corrupted: {message}")]
    LoadCorrupted { message: String },

    #[error("Preset '{name}' holds an invalid configuration: {errors}")]
    InvalidStored {
        name: String,
        errors: ValidationErrors,
    },
}

impl AdgenError for PresetError {
    fn error_code(&self) -> &'static str {
        match self {
            PresetError::InvalidName => "PRESET_INVALID_NAME",
            PresetError::AlreadyExists { .. } => "PRESET_ALREADY_EXISTS",
            PresetError::SaveFailed { .. } => "PRESET_SAVE_FAILED",
            PresetError::LoadCorrupted { .. } => "PRESET_LOAD_CORRUPTED",
            PresetError::InvalidStored { .. } => "PRESET_INVALID_STORED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            PresetError::InvalidName | PresetError::AlreadyExists { .. } => true,

            PresetError::SaveFailed { .. }
            | PresetError::LoadCorrupted { .. }
            | PresetError::InvalidStored { .. } => false,
        }
    }
}
