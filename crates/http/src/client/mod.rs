//! Library API client

pub mod auth;
pub mod config;
pub mod error;

use biblioteca_core::{Navigator, SessionStore};
use config::{ApiConfig, is_auth_endpoint};
use error::ClientError;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use tracing::{debug, warn};

/// Per-request options merged over the client defaults
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Applied after the default and authorization headers, so they win on conflicts
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a caller header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

/// Library API client.
///
/// Reads the bearer token from the [`SessionStore`] on every call. A 401/403
/// from a protected endpoint clears the session and redirects to login
/// before the error is returned.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    sessions: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Session store the token is read from
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::clone(&self.navigator)
    }

    /// Full URL for an endpoint path
    pub fn url(&self, endpoint: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        }
    }

    /// Merge default, authorization and caller headers for `endpoint`
    fn headers(&self, endpoint: &str, caller: HeaderMap) -> Result<HeaderMap, ClientError> {
        let mut headers = self.config.default_headers.clone();

        if !is_auth_endpoint(endpoint) {
            if let Some(token) = self.sessions.token() {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                    ClientError::Configuration("stored token is not a valid header value".into())
                })?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
        }

        for (name, value) in caller.iter() {
            headers.insert(name.clone(), value.clone());
        }

        Ok(headers)
    }

    /// Send a request to `endpoint` and decode the response.
    ///
    /// Returns `Ok(None)` for 204 and for empty success bodies.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ClientError> {
        let url = self.url(endpoint);
        let headers = self.headers(endpoint, options.headers)?;

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        debug!(method = %options.method, url = %url, "Dispatching request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(endpoint = %endpoint, error = %err, "Request did not complete");
                return Err(err.into());
            }
        };

        self.handle_response(endpoint, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: Response,
    ) -> Result<Option<T>, ClientError> {
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if status.is_success() {
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(None);
            }
            return Ok(Some(serde_json::from_str(&text)?));
        }

        let body = response.text().await.unwrap_or_default();

        if is_auth_endpoint(endpoint) {
            warn!(endpoint = %endpoint, status = status.as_u16(), "Authentication rejected");
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("authentication failed")
                    .to_string()
            } else {
                body
            };
            return Err(ClientError::AuthenticationFailed {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(endpoint = %endpoint, status = status.as_u16(), "Session expired, logging out");
            self.sessions.clear();
            self.navigator.redirect_to_login();
            return Err(ClientError::SessionExpired {
                status: status.as_u16(),
            });
        }

        warn!(endpoint = %endpoint, status = status.as_u16(), "Request failed");
        Err(ClientError::RequestFailed {
            status: status.as_u16(),
            body,
        })
    }

    /// `GET` an endpoint
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ClientError> {
        self.request(endpoint, RequestOptions::new(Method::GET))
            .await
    }

    /// `POST` a JSON body
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<Option<T>, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::new(Method::POST).json(body)?)
            .await
    }

    /// `PUT` a JSON body
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<Option<T>, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::new(Method::PUT).json(body)?)
            .await
    }

    /// `DELETE` an endpoint
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Option<T>, ClientError> {
        self.request(endpoint, RequestOptions::new(Method::DELETE))
            .await
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    sessions: Option<SessionStore>,
    navigator: Option<Rc<dyn Navigator>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the store tokens are read from and cleared in
    pub fn sessions(mut self, sessions: SessionStore) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Set the navigator used for the login redirect
    pub fn navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let config = self
            .config
            .ok_or_else(|| ClientError::Configuration("config is required".into()))?;
        let sessions = self
            .sessions
            .ok_or_else(|| ClientError::Configuration("session store is required".into()))?;
        let navigator = self
            .navigator
            .ok_or_else(|| ClientError::Configuration("navigator is required".into()))?;

        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new()
            .user_agent("biblioteca-client/0.1.0")
            .timeout(config.timeout)
            .build()?;

        // Timeouts not supported on WASM
        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new().build()?;

        Ok(ApiClient {
            client,
            config,
            sessions,
            navigator,
        })
    }
}
