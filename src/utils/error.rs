use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Export header is missing the '{column}' column")]
    MissingColumnError { column: String },

    #[error("Logger setup failed: {message}")]
    LoggerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Storage,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::ApiError(_) => ErrorCategory::Network,
            ImportError::CsvError(_) | ImportError::MissingColumnError { .. } => {
                ErrorCategory::Input
            }
            ImportError::IoError(_) => ErrorCategory::Storage,
            ImportError::SerializationError(_) => ErrorCategory::Output,
            ImportError::InvalidConfigValueError { .. } | ImportError::LoggerError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ImportError::ApiError(_) => ErrorSeverity::Medium,
            ImportError::CsvError(_)
            | ImportError::MissingColumnError { .. }
            | ImportError::SerializationError(_) => ErrorSeverity::High,
            ImportError::IoError(_)
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::LoggerError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a run that stopped on this error. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ImportError::ApiError(_) => {
                "Check the network connection and try again later".to_string()
            }
            ImportError::CsvError(_) => {
                "Re-export the library from Goodreads and replace the CSV file".to_string()
            }
            ImportError::MissingColumnError { column } => format!(
                "Make sure the export header contains a '{}' column",
                column
            ),
            ImportError::IoError(_) => {
                "Check that imports/goodreads-export.csv exists and the working directory is writable"
                    .to_string()
            }
            ImportError::SerializationError(_) => {
                "Inspect the parsed records for unexpected content".to_string()
            }
            ImportError::InvalidConfigValueError { .. } => {
                "Fix the configuration value reported above".to_string()
            }
            ImportError::LoggerError { .. } => {
                "Check that app.log can be created in the working directory".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ImportError::ApiError(_) => "Could not reach the book catalog".to_string(),
            ImportError::CsvError(e) => format!("The export file could not be read as CSV: {}", e),
            ImportError::IoError(e) => format!("File operation failed: {}", e),
            ImportError::SerializationError(e) => format!("Could not encode the book list: {}", e),
            ImportError::MissingColumnError { column } => {
                format!("The export file has no '{}' column", column)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
