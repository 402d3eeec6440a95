use thiserror::Error;

/// Reasons a name is refused by the form. The display text is what the
/// error region shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide a name!")]
    Empty,

    #[error("Name should only contain letters and spaces!")]
    InvalidCharacters,

    #[error("Name should be less than 255 characters!")]
    TooLong,
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Prediction service returned HTTP {status}")]
    RemoteStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
}

impl FormError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::ApiError(_) | FormError::RemoteStatusError { .. } => {
                "Error fetching prediction".to_string()
            }
            FormError::IoError(e) => format!("Could not access the saved answers: {}", e),
            FormError::SerializationError(_) => {
                "The saved answers file is not valid JSON".to_string()
            }
            FormError::ConfigError { message } => format!("Configuration problem: {}", message),
            FormError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            FormError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            FormError::StorageError { message } => format!("Storage problem: {}", message),
            FormError::ValidationError(e) => e.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormError::ApiError(_) | FormError::RemoteStatusError { .. } => {
                "Check your network connection and the configured endpoint, then submit again"
            }
            FormError::IoError(_) | FormError::StorageError { .. } => {
                "Check that the store path exists and is writable"
            }
            FormError::SerializationError(_) => {
                "Fix or delete the saved answers file; it will be recreated on the next save"
            }
            FormError::ConfigError { .. }
            | FormError::ConfigValidationError { .. }
            | FormError::InvalidConfigValueError { .. } => {
                "Review the TOML configuration file and command line flags"
            }
            FormError::ValidationError(_) => "Use only letters and spaces, up to 254 characters",
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            FormError::ValidationError(_) => 2,
            FormError::ApiError(_) | FormError::RemoteStatusError { .. } => 3,
            FormError::ConfigError { .. }
            | FormError::ConfigValidationError { .. }
            | FormError::InvalidConfigValueError { .. } => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
