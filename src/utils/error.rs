use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Could not open {role} file {path}: {source}")]
    FileOpenError {
        path: String,
        role: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },

    #[error("{field} of {requested} exceeds capacity {capacity}")]
    CapacityExceededError {
        field: String,
        requested: usize,
        capacity: usize,
    },

    #[error("{what} must not be empty")]
    EmptyInputError { what: String },

    #[error("Window size {k} is invalid for a sequence of length {len}")]
    InvalidWindowError { k: usize, len: usize },

    #[error("Arithmetic overflow during {operation}")]
    OverflowError { operation: String },

    #[error("{message}")]
    InvalidChoiceError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Computation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInputError {
            message: message.into(),
        }
    }

    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::OverflowError {
            operation: operation.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_)
            | Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::FileOpenError { .. } => ErrorCategory::Io,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::InvalidInputError { .. }
            | Self::CapacityExceededError { .. }
            | Self::EmptyInputError { .. }
            | Self::InvalidWindowError { .. }
            | Self::InvalidChoiceError { .. } => ErrorCategory::Input,
            Self::OverflowError { .. } => ErrorCategory::Computation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Computation => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FileOpenError { .. } | Self::IoError(_) => {
                "Check that the file exists and that you have permission to access it"
            }
            Self::CsvError(_) => "Each record line must read: name roll_number marks",
            Self::SerializationError(_) => "Retry with --format text",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Review the configuration file",
            Self::CapacityExceededError { .. } => {
                "Enter a smaller size or raise the limit in the configuration file"
            }
            Self::InvalidWindowError { .. } => {
                "The window size must be between 1 and the number of elements"
            }
            Self::OverflowError { .. } => "Use smaller values",
            Self::InvalidInputError { .. }
            | Self::EmptyInputError { .. }
            | Self::InvalidChoiceError { .. } => "Re-run the exercise and check the input format",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FileOpenError { path, role, .. } => format!("Could not open {} file {}", role, path),
            Self::InvalidChoiceError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
