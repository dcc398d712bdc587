//! Error types for the Mortydex plugin.
//!
//! This module defines the centralized error type [`MortydexError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Mortydex plugin operations.
///
/// This enum consolidates all error conditions that can occur while talking to the
/// remote character service or while running the plugin itself. The first four
/// variants form the API error taxonomy; the remaining variants cover local
/// concerns (response decoding, themes, configuration).
#[derive(Debug, Error)]
pub enum MortydexError {
    /// The requested resource does not exist (HTTP 404).
    ///
    /// For the character list this means "no results for this page or filter";
    /// for single resources it means the id is unknown.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The remote service answered with a non-2xx, non-404 status.
    #[error("HTTP error: status {status}")]
    Transport {
        /// Status code returned by the service.
        status: u16,
    },

    /// A service call was constructed with malformed input.
    ///
    /// Raised before any request is issued, e.g. for an empty episode id batch
    /// or a location URL that does not belong to the character service.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The request could not complete at the transport level.
    ///
    /// Covers DNS failures, refused connections, and any other condition in
    /// which no HTTP status was produced.
    #[error("Network failure: {0}")]
    Network(String),

    /// A response body could not be decoded.
    ///
    /// Wraps errors from `serde_json`. Automatically converts using `#[from]`.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MortydexError {
    /// Returns `true` for errors the user can sensibly retry.
    ///
    /// Validation, theme, and configuration errors are deterministic and
    /// excluded; everything that depends on the remote service or the network
    /// is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::Validation(_) | Self::Theme(_) | Self::Config(_))
    }
}

/// A specialized `Result` type for Mortydex operations.
///
/// Type alias for `std::result::Result<T, MortydexError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MortydexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_are_retryable() {
        assert!(MortydexError::NotFound("x".into()).is_retryable());
        assert!(MortydexError::Transport { status: 500 }.is_retryable());
        assert!(MortydexError::Network("timeout".into()).is_retryable());
    }

    #[test]
    fn validation_errors_are_not_retryable() {
        assert!(!MortydexError::Validation("empty id list".into()).is_retryable());
    }
}
