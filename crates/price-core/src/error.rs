//! Error types for price-core

use crate::headers::Role;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in price-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open or read a price file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// None of the file's headers belongs to a role's synonym set
    #[error("no {role} column in '{path}', expected one of {synonyms:?}")]
    IncorrectHeaders {
        path: PathBuf,
        role: Role,
        synonyms: Vec<String>,
    },

    /// A price or weight field could not be turned into a usable number
    #[error("invalid {column} value '{value}' at line {line} in '{path}': {reason}")]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: Role,
        value: String,
        reason: String,
    },

    /// Malformed file mask
    #[error("invalid file mask: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Short tag prefixed to every logged failure
    pub fn category(&self) -> &'static str {
        match self {
            Error::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                "FileNotFound"
            }
            Error::FileRead { .. } | Error::Io(_) => "IoError",
            Error::Csv { .. } => "CsvError",
            Error::IncorrectHeaders { .. } => "IncorrectHeaders",
            Error::InvalidValue { .. } => "ValueError",
            Error::Pattern(_) => "PatternError",
            Error::Json(_) => "JsonError",
        }
    }
}
