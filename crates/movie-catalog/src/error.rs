//! Error types for the movie-catalog crate.
//!
//! Criteria evaluation itself never fails; these errors come from the
//! fallible edges around it: reading catalog files, parsing lines, and
//! building criteria from query configuration.

use thiserror::Error;

/// Errors that can occur while loading a catalog or building a query
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a catalog file couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A field had a value outside its domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Query configuration describes an unusable criteria
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Query JSON was malformed
    #[error("Malformed query JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
