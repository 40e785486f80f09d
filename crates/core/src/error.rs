//! Error types for Cadence.
//!
//! Index and catalog operations are total and never fail. These errors only
//! surface while turning user-supplied settings into typed configuration.

use alloc::string::String;
use core::fmt;

/// Result type alias for Cadence configuration parsing.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Cadence configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A duplicate-key policy name that is not recognized.
    UnknownPolicy {
        name: String,
    },
    /// A configuration value outside its accepted domain.
    InvalidConfig {
        message: String,
    },
}

impl Error {
    /// Creates an unknown policy error.
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Error::UnknownPolicy { name: name.into() }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownPolicy { name } => {
                write!(f, "Unknown duplicate-key policy: {}", name)
            }
            Error::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}
