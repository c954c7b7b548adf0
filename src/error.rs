//! Error types for PetFriends client operations.
//!
//! Remote failures are *not* errors here: a 403 from the key endpoint or a 500
//! from the photo upload comes back as an ordinary [`ApiResponse`](crate::ApiResponse)
//! with its status code and body. [`PetFriendsError`] only covers what goes
//! wrong on this side of the wire:
//! - Configuration errors (missing credentials, malformed base URL)
//! - Transport failures (DNS, connection refused, TLS)
//! - Response bodies that don't decode into the requested type
//! - API keys that can't be sent as a header value
//! - Photo fixtures that can't be read from disk
//!
//! # Result Type
//!
//! ```rust
//! use pet_friends::PetFriendsResult;
//!
//! fn my_function() -> PetFriendsResult<String> {
//!     Ok("Success".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The PetFriends service or the network between us misbehaved.
    External,

    /// The caller can fix it: bad configuration, bad key, missing fixture.
    Client,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,
}

// ============================================================================
// PetFriends error types
// ============================================================================

/// Alias for `Result<T, PetFriendsError>`.
pub type PetFriendsResult<T> = std::result::Result<T, PetFriendsError>;

/// Errors raised locally by the PetFriends client.
///
/// Use the constructor methods, which log the error once at creation:
///
/// ```rust
/// use pet_friends::PetFriendsError;
///
/// let err = PetFriendsError::configuration_error("PETFRIENDS_EMAIL is not set");
/// assert!(err.to_string().contains("PETFRIENDS_EMAIL"));
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Client |
/// | `RequestFailed` | External |
/// | `ResponseParsingError` | External |
/// | `InvalidHeaderValue` | Client |
/// | `PhotoUnreadable` | Client |
#[derive(Error, Debug)]
pub enum PetFriendsError {
    /// Client configuration is invalid or incomplete.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request never produced a response.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A response body didn't have the expected shape.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// A value could not be encoded as an HTTP header.
    #[error("Invalid value for header {header}")]
    InvalidHeaderValue {
        /// The header that was being built.
        header: &'static str,
    },

    /// A photo file could not be read for upload.
    #[error("Cannot read photo {}: {source}", .path.display())]
    PhotoUnreadable {
        /// Path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PetFriendsError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::InvalidHeaderValue { .. } => ErrorCategory::Client,
            Self::PhotoUnreadable { .. } => ErrorCategory::Client,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::InvalidHeaderValue { .. } => ErrorSeverity::Error,
            Self::PhotoUnreadable { .. } => ErrorSeverity::Error,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "PetFriends configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "PetFriends request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "PetFriends response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    /// Header values are secrets (the API key), so only the header name is logged.
    pub fn invalid_header_value(header: &'static str) -> Self {
        log_error!(
            error_type = "invalid_header_value",
            header = header,
            "Value cannot be sent as an HTTP header"
        );
        Self::InvalidHeaderValue { header }
    }

    pub fn photo_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        log_error!(
            error_type = "photo_unreadable",
            path = %path.display(),
            error = %source,
            "Photo file could not be read"
        );
        Self::PhotoUnreadable { path, source }
    }
}
