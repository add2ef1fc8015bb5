//! Error types and handling for the `gezgin` library

use thiserror::Error;

/// Main error type for the `gezgin` library
#[derive(Error, Debug)]
pub enum GezginError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Request validation errors; no network call is made
    #[error("Invalid request: {message}")]
    Validation { message: String },

    /// Missing or unusable API credential
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// Network or endpoint failures, including unexpected response envelopes
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Model output contained no parseable JSON document
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Model output contained JSON that does not match the plan shape
    #[error("Schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GezginError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new malformed response error
    pub fn malformed_response<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new schema mismatch error
    pub fn schema_mismatch<S: Into<String>>(message: S) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }

    /// Whether resubmitting the same request can reasonably succeed.
    ///
    /// Authentication failures need reconfiguration first; everything else
    /// is worth another attempt.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GezginError::Authentication { .. })
    }

    /// Get a user-friendly error message
    ///
    /// Transport, malformed response, and schema mismatch all read as the
    /// same retryable failure at the view boundary; the variants stay
    /// distinct internally for diagnostics.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GezginError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            GezginError::Validation { message } => {
                format!("Invalid request: {message}")
            }
            GezginError::Authentication { .. } => {
                "Gemini API anahtarı bulunamadı. Please configure an API key and try again."
                    .to_string()
            }
            GezginError::Transport { .. }
            | GezginError::MalformedResponse { .. }
            | GezginError::SchemaMismatch { .. } => {
                "Seyahat planı oluşturulurken bir hata oluştu. Lütfen tekrar deneyin.".to_string()
            }
            GezginError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
