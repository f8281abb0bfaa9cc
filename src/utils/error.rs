use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameError {
    #[error("Full name '{value}' must contain exactly one '.' separator, found {separators}")]
    FormatError { value: String, separators: usize },

    #[error("Cannot read full name: {field} is absent")]
    AbsentValueError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl NameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NameError::FormatError { .. } | NameError::AbsentValueError { .. } => {
                ErrorCategory::Domain
            }
            NameError::IoError(_) => ErrorCategory::Io,
            NameError::SerializationError(_) => ErrorCategory::Serialization,
            NameError::ConfigValidationError { .. }
            | NameError::InvalidConfigValueError { .. }
            | NameError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            NameError::FormatError { .. } => {
                "Write the full name as '<given>.<family>' with a single dot".to_string()
            }
            NameError::AbsentValueError { .. } => {
                "Assign the given and family names (or a full name) before reading it".to_string()
            }
            NameError::IoError(_) => "Check that the file exists and is readable".to_string(),
            NameError::SerializationError(_) => "Report this as a bug".to_string(),
            NameError::ConfigValidationError { .. } => {
                "Check the scenario file syntax against the documented format".to_string()
            }
            NameError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            NameError::MissingConfigError { field } => format!("Add the '{}' setting", field),
        }
    }

    /// 依嚴重程度決定的 process exit code
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NameError::FormatError { value, .. } => {
                format!("'{}' is not a valid full name", value)
            }
            NameError::AbsentValueError { .. } => "The full name has been deleted".to_string(),
            NameError::IoError(e) => format!("Could not read file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NameError>;
