use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between an empty query result
/// and a genuine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the query produced output
    Success = 0,
    /// The query ran but matched nothing (e.g. no source near a position)
    NoMatch = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, malformed page, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoMatch => write!(f, "No Match (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for loading and querying TeVCat.
///
/// `Network` and the format errors (`MissingMarker`, `InvalidPayload`,
/// `MissingField`, `InvalidField`, `InvalidCoordinate`, `UnknownDiscoverer`)
/// abort a load; no partial catalog is ever produced.
#[derive(Debug, Error)]
pub enum TevCatError {
    #[error("Failed to retrieve the TeVCat page: {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection or use --page with a saved copy of the page")]
    Network { url: String, details: String },

    #[error("The TeVCat page does not contain the expected {marker} marker\n\n💡 Hint: The page layout may have changed; please verify the page content")]
    MissingMarker { marker: String },

    #[error("Failed to decode the embedded catalog payload\nDetails: {details}")]
    InvalidPayload { details: String },

    #[error("{record} is missing required field '{field}'")]
    MissingField { record: String, field: String },

    #[error("{record} has an invalid value for '{field}': {value} (expected {expected})")]
    InvalidField {
        record: String,
        field: String,
        value: String,
        expected: String,
    },

    #[error("Invalid coordinate '{value}': {reason}")]
    InvalidCoordinate { value: String, reason: String },

    #[error("Cannot find discoverer \"{observatory_name}\" ({discoverer})")]
    UnknownDiscoverer {
        observatory_name: String,
        discoverer: i64,
    },

    #[error("Catalog {id} not found")]
    UnknownCatalog { id: i64 },

    #[error("Source not found: {query}\n\n💡 Hint: Use the 'list' command to see available sources")]
    UnknownSource { query: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration and arguments
    #[error("Validation error: {message}")]
    Validation { message: String },
}
