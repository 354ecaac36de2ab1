//! Error types for the CSV to JSON conversion pipeline

use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Missing or invalid CLI arguments. Always fatal before any
    /// conversion work starts.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Directory listing or file read/write failure. Not caught anywhere
    /// in the pipeline; propagates and terminates the run.
    #[error("IO error{}: {source}", display_path(.path))]
    Io {
        #[source]
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    /// Malformed row or encoding issue while parsing a tabular file.
    /// Same propagation as IO errors, no per-file isolation by default.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// JSON serialization failure while writing a record set.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}

impl ConversionError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: Some(path.into()),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, path: None }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
