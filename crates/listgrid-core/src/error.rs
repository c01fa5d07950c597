//! Error types for listgrid operations.
//!
//! The resolution pipeline itself degrades on missing data instead of
//! erroring; these types cover configuration lookups (`ColumnSet::require`)
//! and collaborator implementations.

use std::fmt;

/// The primary error type for listgrid operations.
#[derive(Debug)]
pub enum Error {
    /// A column name that no configured column matches.
    UnknownColumn {
        /// The offending column name.
        name: String,
    },
    /// Custom error with message.
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownColumn { name } => write!(f, "unknown column: {name}"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a custom error from a message.
    pub fn custom(msg: impl Into<String>) -> Self {
        Error::Custom(msg.into())
    }
}

/// Result type alias for listgrid operations.
pub type Result<T> = std::result::Result<T, Error>;
