//! Client-wide authentication constants

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Storage key holding the JSON-encoded session, in both session and local storage
    pub const SESSION_KEY: &'static str = "usuarioLogado";

    /// Document users are sent to when they must authenticate or after logout
    pub const LOGIN_PATH: &'static str = "login.html";

    /// Landing document linked from the access-denied page
    pub const HOME_PATH: &'static str = "index.html";

    /// Path prefix of the endpoints that issue sessions
    pub const AUTH_PATH_PREFIX: &'static str = "/auth";
}
