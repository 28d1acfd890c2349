//! Auth endpoint methods

use super::{ApiClient, ClientError};
use crate::types::{LoginRequest, RegistrationRequest};
use biblioteca_core::UserSession;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

impl ApiClient {
    /// Exchange credentials for a session. Does not store it.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserSession, ClientError> {
        self.post(LOGIN_ENDPOINT, request)
            .await?
            .ok_or_else(|| ClientError::EmptyResponse {
                endpoint: LOGIN_ENDPOINT.to_string(),
            })
    }

    /// Create an account and receive its session. Does not store it.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<UserSession, ClientError> {
        self.post(REGISTER_ENDPOINT, request)
            .await?
            .ok_or_else(|| ClientError::EmptyResponse {
                endpoint: REGISTER_ENDPOINT.to_string(),
            })
    }
}
