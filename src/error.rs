//! Error types and exit codes for the summarizer

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for summarizer operations
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: file is not valid UTF-8")]
    Decode { path: String },

    #[error("Unsupported language for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Failed to parse file: {message}")]
    Parse { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SummarizeError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Every failure maps to exit code 1; consumers only distinguish success
    /// from failure.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}

/// Result type alias for summarizer operations
pub type Result<T> = std::result::Result<T, SummarizeError>;
