use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Error loading stop words from '{path}': {source}")]
    StopWordLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error processing file '{path}': {source}")]
    FileProcess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No tags to save")]
    EmptyResult,

    #[error("Error saving tags to '{path}': {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },

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

    #[error("Unknown command: {input}")]
    UnknownCommand { input: String },

    #[error("'{command}' needs a {argument} argument")]
    MissingArgument { command: String, argument: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 警告，操作未執行但不算失敗
    Low,
    Medium,
    High,
    Critical,
}

impl TagError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TagError::StopWordLoad { .. } | TagError::FileProcess { .. } => ErrorCategory::Input,
            TagError::EmptyResult
            | TagError::Export { .. }
            | TagError::CsvError(_)
            | TagError::SerializationError(_)
            | TagError::IoError(_) => ErrorCategory::Output,
            TagError::ConfigValidationError { .. } | TagError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TagError::UnknownCommand { .. }
            | TagError::MissingArgument { .. }
            | TagError::InvalidInput { .. } => ErrorCategory::Usage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TagError::EmptyResult
            | TagError::UnknownCommand { .. }
            | TagError::MissingArgument { .. }
            | TagError::InvalidInput { .. } => ErrorSeverity::Low,
            TagError::StopWordLoad { .. }
            | TagError::FileProcess { .. }
            | TagError::Export { .. }
            | TagError::CsvError(_)
            | TagError::SerializationError(_)
            | TagError::IoError(_) => ErrorSeverity::High,
            TagError::ConfigValidationError { .. } | TagError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 給使用者看的訊息，保留底層 I/O 錯誤描述
    pub fn user_friendly_message(&self) -> String {
        match self {
            TagError::EmptyResult => "Warning: no tags to save".to_string(),
            TagError::UnknownCommand { input } => format!(
                "Unknown command '{}'. Type 'help' for the list of commands",
                input
            ),
            TagError::MissingArgument { command, argument } => {
                format!("Usage: {} <{}>", command, argument)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TagError::StopWordLoad { .. } => {
                "Check that the stop-word file exists and is readable; \
                 the previous stop words are still active"
            }
            TagError::FileProcess { .. } => {
                "Check that the text file exists and is readable, then select it again"
            }
            TagError::EmptyResult => {
                "Process a text file that contains at least one non-stop word first"
            }
            TagError::Export { .. } | TagError::IoError(_) => {
                "Check that the destination directory exists and is writable; \
                 the extracted tags are kept"
            }
            TagError::CsvError(_) | TagError::SerializationError(_) => "Try another export format",
            TagError::ConfigValidationError { .. } | TagError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line arguments"
            }
            TagError::UnknownCommand { .. }
            | TagError::MissingArgument { .. }
            | TagError::InvalidInput { .. } => "Type 'help' to list available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, TagError>;
