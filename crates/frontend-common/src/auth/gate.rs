//! Authentication and authorization gate for pages

use biblioteca_core::{Durability, Role, SessionStore, UserSession};
use biblioteca_http::{ApiClient, ClientError, LoginRequest, RegistrationRequest};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Renders the page shown when the user lacks a required role
pub trait PageView {
    fn show_access_denied(&self, required: Role);
}

/// Page view that records what it was asked to show
#[derive(Debug, Default)]
pub struct MemoryPageView {
    denied: RefCell<Vec<Role>>,
}

impl MemoryPageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roles passed to every access-denied render, oldest first
    pub fn denied(&self) -> Vec<Role> {
        self.denied.borrow().clone()
    }
}

impl PageView for MemoryPageView {
    fn show_access_denied(&self, required: Role) {
        self.denied.borrow_mut().push(required);
    }
}

/// Outcome of [`AuthGate::protect_page`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAccess {
    /// The page may render for this session
    Granted(UserSession),
    /// No session; the navigator was sent to the login document
    RedirectedToLogin,
    /// Authenticated without the required role; the access-denied view was rendered
    Denied { required: Role },
}

impl PageAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

/// Answers authentication and authorization questions from the stored session
/// and runs the login, registration and logout flows.
#[derive(Clone)]
pub struct AuthGate {
    client: ApiClient,
    view: Rc<dyn PageView>,
}

impl AuthGate {
    /// Create a gate over the client's session store and navigator
    pub fn new(client: ApiClient, view: Rc<dyn PageView>) -> Self {
        Self { client, view }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn sessions(&self) -> &SessionStore {
        self.client.sessions()
    }

    /// The authenticated session, if any
    pub fn current_user(&self) -> Option<UserSession> {
        self.sessions().read().filter(UserSession::has_token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Whether the authenticated user has exactly `role`
    pub fn has_role(&self, role: Role) -> bool {
        self.current_user().is_some_and(|user| user.is(role))
    }

    /// Whether the authenticated user's role is one of `roles`
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.current_user()
            .is_some_and(|user| roles.iter().any(|role| user.is(*role)))
    }

    /// Decide whether the current page may render.
    ///
    /// Anonymous visitors are redirected to login. Authenticated users
    /// without `required` get the access-denied view and stay on the URL.
    pub fn protect_page(&self, required: Option<Role>) -> PageAccess {
        let Some(user) = self.current_user() else {
            warn!("Not authenticated, redirecting to login");
            self.client.navigator().redirect_to_login();
            return PageAccess::RedirectedToLogin;
        };

        if let Some(required) = required {
            if !user.is(required) {
                warn!(%required, role = ?user.role, "Access denied");
                self.view.show_access_denied(required);
                return PageAccess::Denied { required };
            }
        }

        debug!(username = %user.username, "Page access granted");
        PageAccess::Granted(user)
    }

    /// Log in and store the session with the chosen durability.
    ///
    /// Stored state is untouched when the request fails.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        durability: Durability,
    ) -> Result<UserSession, ClientError> {
        let request = LoginRequest::new(username, password);
        let session = self.client.login(&request).await.inspect_err(|err| {
            warn!(username = %request.username, error = %err, "Login failed");
        })?;

        self.sessions().write(&session, durability)?;
        info!(username = %session.username, role = ?session.role, "Logged in");
        Ok(session)
    }

    /// Register an account; the returned session is stored ephemerally
    pub async fn register(
        &self,
        profile: &RegistrationRequest,
    ) -> Result<UserSession, ClientError> {
        let session = self.client.register(profile).await.inspect_err(|err| {
            warn!(username = %profile.username, error = %err, "Registration failed");
        })?;

        self.sessions().write(&session, Durability::Ephemeral)?;
        info!(username = %session.username, "Registered");
        Ok(session)
    }

    /// Forget the session and go to the login document. Never fails.
    pub fn logout(&self) {
        self.sessions().clear();
        info!("Logged out");
        self.client.navigator().redirect_to_login();
    }
}
