//! Client error types

use biblioteca_core::SessionError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// An auth endpoint rejected the credentials or profile
    #[error("Authentication failed ({status}): {message}")]
    AuthenticationFailed { status: u16, message: String },

    /// A protected endpoint answered 401/403; the local session has been cleared
    #[error("Session expired ({status})")]
    SessionExpired { status: u16 },

    /// Any other non-2xx response
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Network, DNS or timeout failure below HTTP
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session storage failure
    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),

    /// A success response had no body where one was required
    #[error("Empty response from {endpoint}")]
    EmptyResponse { endpoint: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { status, .. }
            | Self::SessionExpired { status }
            | Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Whether the caller was logged out because the session expired
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }
}
