//! Error types for globe_layers
//!
//! This module defines the error types used throughout the SDK,
//! including host collection failures, option validation and data loading.

use std::fmt;

/// Result type for globe_layers operations
pub type Result<T> = std::result::Result<T, Error>;

/// globe_layers errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Host-specific error (the wrapped rendering collection refused an operation)
    BackendError(String),

    /// Registry name rejected at the boundary (empty or blank)
    InvalidName(String),

    /// Graphic or layer options could not be resolved (bad CSS color, mismatched lengths, ...)
    InvalidOptions(String),

    /// Fetching or parsing an external data source failed
    LoadFailed(String),

    /// Imagery service type not supported by the provider builder
    UnsupportedService(String),

    /// Viewer or host initialization failed
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            Error::InvalidOptions(msg) => write!(f, "Invalid options: {}", msg),
            Error::LoadFailed(msg) => write!(f, "Load failed: {}", msg),
            Error::UnsupportedService(msg) => write!(f, "Unsupported service: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Reject empty or whitespace-only registry names
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidName(format!("'{}' is empty", name)));
    }
    Ok(())
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
