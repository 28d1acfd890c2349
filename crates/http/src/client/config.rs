//! API endpoint configuration

use biblioteca_core::AuthConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Configuration handed to [`ApiClient`](super::ApiClient) at construction
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub default_headers: HeaderMap,
    /// Only enforced by native transports; the browser fetch transport ignores it
    pub timeout: Duration,
}

impl ApiConfig {
    /// API served by a developer's local backend
    pub const LOCAL_BASE_URL: &'static str = "http://localhost:8080/api";

    /// API of the deployed backend
    pub const DEPLOYED_BASE_URL: &'static str = "https://sistema-biblioteca-api.onrender.com/api";

    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a configuration for an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Create the configuration for the page's host name
    pub fn for_host(hostname: &str) -> Self {
        Self::new(base_url_for_host(hostname))
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add or replace a default header
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }
}

/// Base URL for a page host: local backends for loopback hosts, the deployed API otherwise
pub fn base_url_for_host(hostname: &str) -> &'static str {
    match hostname {
        "localhost" | "127.0.0.1" | "[::1]" => ApiConfig::LOCAL_BASE_URL,
        _ => ApiConfig::DEPLOYED_BASE_URL,
    }
}

/// Whether `endpoint` is one of the session-issuing endpoints.
///
/// These never carry the bearer token and are exempt from forced logout.
pub fn is_auth_endpoint(endpoint: &str) -> bool {
    let path = endpoint.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_start_matches('/');
    match path.strip_prefix(AuthConfig::AUTH_PATH_PREFIX.trim_start_matches('/')) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
