//! HTTP client for the library API
//!
//! Wraps `reqwest` with bearer-token attachment from the stored session,
//! typed failure classification and forced logout on expired sessions.

pub mod client;
pub mod types;

pub use client::config::{ApiConfig, is_auth_endpoint};
pub use client::error::ClientError;
pub use client::{ApiClient, ApiClientBuilder, RequestOptions};
pub use types::{LoginRequest, RegistrationRequest};
