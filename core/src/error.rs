//! Error types for the netkit-core library.

use thiserror::Error;

/// Result type alias for netkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving addresses and inspecting interfaces.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a valid IP address literal.
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Failed to parse command output.
    #[error("Failed to parse output: {0}")]
    ParseError(String),

    /// An operation did not finish within its deadline.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform not supported.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}

impl Error {
    pub(crate) fn invalid_address(address: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidAddress {
            address: address.into(),
            reason: reason.to_string(),
        }
    }

    /// Reports whether this error, or anything it wraps, is a timeout.
    pub fn is_timeout(&self) -> bool {
        crate::timeout::is_timeout(self)
    }
}
