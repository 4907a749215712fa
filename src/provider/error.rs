//! Provider failure taxonomy

use thiserror::Error;

/// Errors returned by an email provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider rejected the public key
    #[error("provider rejected credentials (401): {body}")]
    Unauthorized { body: String },
    /// The provider rejected the service/template ids or payload
    #[error("provider rejected request (400): {body}")]
    BadRequest { body: String },
    /// Any other non-success status
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The request never reached the provider or no response came back
    #[error("network error: {0}")]
    Network(String),
    /// Other client-side failures (request building, body decoding)
    #[error("transport error: {0}")]
    Transport(String),
}

impl ProviderError {
    /// Build an error from a non-success HTTP status and its response body
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 => Self::Unauthorized { body },
            400 => Self::BadRequest { body },
            status => Self::Status { status, body },
        }
    }

    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Unauthorized { .. } => FailureCategory::Authentication,
            Self::BadRequest { .. } => FailureCategory::Configuration,
            Self::Network(_) => FailureCategory::Connectivity,
            Self::Status { .. } | Self::Transport(_) => FailureCategory::Other,
        }
    }
}

/// User-facing grouping of delivery failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Authentication,
    Configuration,
    Connectivity,
    Other,
}

impl FailureCategory {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Authentication => "Authentication error. Check your EmailJS public key.",
            Self::Configuration => "Configuration error. Check your EmailJS service and template IDs.",
            Self::Connectivity => "Connection error. Check your internet connection and try again.",
            Self::Other => "There was an error sending your message. Please try again.",
        }
    }
}
