//! Error types for the CINC SDK
//!
//! Every failure surfaced by the SDK is a [`CincError`]. The variant is the
//! error kind; HTTP-derived variants keep the status code and the raw
//! response body so callers can inspect what the server actually sent.

use serde_json::Value;
use thiserror::Error;

/// Discriminant of a [`CincError`], useful for matching without fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Generic,
    Network,
    Authentication,
    Authorization,
    NotFound,
    Validation,
    RateLimit,
    Server,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Generic => "generic",
            Self::Network => "network",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::RateLimit => "rate_limit",
            Self::Server => "server",
        };
        f.write_str(name)
    }
}

/// Main error type for CINC SDK operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CincError {
    // === Transport Errors ===
    /// No response was received (connection refused, DNS failure, timeout)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Anything that does not fit another kind, including requests that
    /// could not be built and unexpected status codes
    #[error("CINC API error: {message}")]
    Generic {
        message: String,
        status_code: Option<u16>,
        raw_response: Option<Value>,
    },

    // === Client Errors (4xx) ===
    /// Request rejected as invalid (HTTP 400) or invalid local input
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        /// `None` when the error was raised locally, before any request
        status_code: Option<u16>,
        raw_response: Option<Value>,
    },

    /// Missing or invalid credentials (HTTP 401)
    #[error("Authentication failed: {message}")]
    Authentication {
        message: String,
        raw_response: Option<Value>,
    },

    /// Credentials valid but not permitted (HTTP 403)
    #[error("Insufficient permissions: {message}")]
    Authorization {
        message: String,
        raw_response: Option<Value>,
    },

    /// Resource does not exist (HTTP 404)
    #[error("Resource not found: {message}")]
    NotFound {
        message: String,
        raw_response: Option<Value>,
    },

    /// Too many requests (HTTP 429)
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        raw_response: Option<Value>,
    },

    // === Server Errors (5xx) ===
    /// Server-side failure (HTTP 500, 502, 503, 504)
    #[error("Server error ({status_code}): {message}")]
    Server {
        message: String,
        status_code: u16,
        raw_response: Option<Value>,
    },
}

impl CincError {
    /// Classify a completed HTTP exchange that returned a non-success status
    ///
    /// The message is taken from the body's `message` field when present,
    /// otherwise `fallback` is used. The mapping depends only on `status`
    /// and `body`.
    pub fn from_status(status: u16, body: Option<Value>, fallback: impl Into<String>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| fallback.into());
        let raw_response = body;

        match status {
            400 => Self::Validation {
                message,
                status_code: Some(400),
                raw_response,
            },
            401 => Self::Authentication {
                message,
                raw_response,
            },
            403 => Self::Authorization {
                message,
                raw_response,
            },
            404 => Self::NotFound {
                message,
                raw_response,
            },
            429 => Self::RateLimit {
                message,
                raw_response,
            },
            500 | 502 | 503 | 504 => Self::Server {
                message,
                status_code: status,
                raw_response,
            },
            _ => Self::Generic {
                message,
                status_code: Some(status),
                raw_response,
            },
        }
    }

    /// Create a network error (no response received)
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a generic error without a status code
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
            status_code: None,
            raw_response: None,
        }
    }

    /// Create a locally raised validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            status_code: None,
            raw_response: None,
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Generic { .. } => ErrorKind::Generic,
            Self::Network { .. } => ErrorKind::Network,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Authorization { .. } => ErrorKind::Authorization,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::Server { .. } => ErrorKind::Server,
        }
    }

    /// Human-readable message, without the kind prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::Generic { message, .. }
            | Self::Network { message }
            | Self::Authentication { message, .. }
            | Self::Authorization { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// HTTP status code associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Network { .. } => None,
            Self::Generic { status_code, .. } | Self::Validation { status_code, .. } => {
                *status_code
            }
            Self::Authentication { .. } => Some(401),
            Self::Authorization { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::RateLimit { .. } => Some(429),
            Self::Server { status_code, .. } => Some(*status_code),
        }
    }

    /// Raw response body returned by the server, if any
    pub fn raw_response(&self) -> Option<&Value> {
        match self {
            Self::Network { .. } => None,
            Self::Generic { raw_response, .. }
            | Self::Validation { raw_response, .. }
            | Self::Authentication { raw_response, .. }
            | Self::Authorization { raw_response, .. }
            | Self::NotFound { raw_response, .. }
            | Self::RateLimit { raw_response, .. }
            | Self::Server { raw_response, .. } => raw_response.as_ref(),
        }
    }

    /// Returns true if the request that produced this error may be retried
    ///
    /// Network failures, server errors and any other 5xx status qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Server { .. } => true,
            Self::Generic {
                status_code: Some(code),
                ..
            } => *code >= 500,
            _ => false,
        }
    }

    /// Returns true if this error calls for new credentials or permissions
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::Authorization { .. })
    }

    /// Returns true if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }
}

/// Result type alias for CINC operations
pub type CincResult<T> = Result<T, CincError>;
