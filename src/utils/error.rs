// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentReadError {
    #[error("Could not read '{file}': {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{file}' is not valid UTF-8 text: {source}")]
    Decode {
        file: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl DocumentReadError {
    /// Name of the file that failed, as shown in the report of failures.
    pub fn file_name(&self) -> &str {
        match self {
            DocumentReadError::Io { file, .. } => file,
            DocumentReadError::Decode { file, .. } => file,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Field rule '{rule}' has an invalid pattern: {reason}")]
    InvalidRule { rule: String, reason: String },

    #[error("Invalid structural selector '{0}'")]
    InvalidSelector(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document read failed: {0}")]
    Read(#[from] DocumentReadError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
