use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Invalid input: {field} must be a non-negative length in meters, got {value}")]
    InvalidInputError { field: String, value: f64 },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Report rendering error: {message}")]
    ReportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EstimatorError {
    pub fn invalid_input(field: &str, value: f64) -> Self {
        Self::InvalidInputError {
            field: field.to_string(),
            value,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInputError { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ZipError(_)
            | Self::CsvError(_)
            | Self::IoError(_)
            | Self::SerializationError(_)
            | Self::ReportError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => match self {
                Self::IoError(_) => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInputError { .. } => {
                "Enter width, depth and length as zero or positive values in meters"
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file against the documented [duct], [display] and [output] sections"
            }
            Self::MissingConfigError { .. } => "Add the missing field to the configuration",
            Self::IoError(_) => "Check that the output directory exists and is writable",
            Self::ZipError(_) => "Disable compression or choose a different archive name",
            Self::CsvError(_) | Self::SerializationError(_) | Self::ReportError { .. } => {
                "Try a different output format"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInputError { field, value } => {
                format!("Duct {} cannot be negative (got {})", field, value)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            Self::IoError(e) => format!("Could not write the report: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
