//! Error handling for domain-hack operations.
//!
//! Note the small surface: per-candidate lookup failures are not errors,
//! they are [`crate::LookupStatus`] values in the result sequence. This
//! type covers the setup-level failures that can stop a run before it
//! starts, such as unreadable files and invalid configuration.

use std::fmt;

/// Main error type for domain-hack operations.
#[derive(Debug, Clone)]
pub enum DomainHackError {
    /// Configuration errors (invalid settings, unparseable config files)
    ConfigError { message: String },

    /// File I/O errors when reading wordlists or TLD lists
    FileError { path: String, message: String },

    /// Invalid caller-supplied input (bad length bounds, empty inputs)
    InvalidInput { message: String },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl DomainHackError {
    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid-input error.
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainHackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for DomainHackError {}

impl From<std::io::Error> for DomainHackError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
