//! Page navigation capability

use crate::config::AuthConfig;
use std::cell::RefCell;
use tracing::{debug, warn};

/// Moves the user between documents.
///
/// The browser implementation drives `window.location`; [`MemoryNavigator`]
/// records intent for tests.
pub trait Navigator {
    /// Path of the current document
    fn current_path(&self) -> String;

    /// Navigate to `href`
    fn assign(&self, href: &str);

    /// Send the user to the login document.
    ///
    /// Returns `false` without navigating when the login document is already
    /// showing, so several failing requests can't start a redirect loop.
    fn redirect_to_login(&self) -> bool {
        if is_login_document(&self.current_path()) {
            debug!("Already on the login document, skipping redirect");
            return false;
        }
        warn!("Redirecting to login");
        self.assign(AuthConfig::LOGIN_PATH);
        true
    }
}

/// Whether `path` names the login document
pub fn is_login_document(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').next() == Some(AuthConfig::LOGIN_PATH)
}

/// Navigator that keeps the location in memory
#[derive(Debug)]
pub struct MemoryNavigator {
    path: RefCell<String>,
    history: RefCell<Vec<String>>,
}

impl MemoryNavigator {
    /// Start at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: RefCell::new(path.into()),
            history: RefCell::new(Vec::new()),
        }
    }

    /// Every href passed to [`Navigator::assign`], oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Number of redirects to the login document
    pub fn login_redirects(&self) -> usize {
        self.history
            .borrow()
            .iter()
            .filter(|href| is_login_document(href))
            .count()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(format!("/{}", AuthConfig::HOME_PATH))
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn assign(&self, href: &str) {
        self.history.borrow_mut().push(href.to_string());
        *self.path.borrow_mut() = href.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_document_detection() {
        assert!(is_login_document("login.html"));
        assert!(is_login_document("/app/login.html"));
        assert!(is_login_document("/login.html?next=books.html"));
        assert!(!is_login_document("/index.html"));
        assert!(!is_login_document("/"));
        assert!(!is_login_document("/not-login.html"));
    }

    #[test]
    fn test_redirect_to_login() {
        let navigator = MemoryNavigator::new("/books.html");

        assert!(navigator.redirect_to_login());
        assert_eq!(navigator.history(), vec![AuthConfig::LOGIN_PATH.to_string()]);
        assert!(is_login_document(&navigator.current_path()));
    }

    #[test]
    fn test_repeated_redirects_do_not_loop() {
        let navigator = MemoryNavigator::new("/books.html");

        assert!(navigator.redirect_to_login());
        assert!(!navigator.redirect_to_login());
        assert!(!navigator.redirect_to_login());
        assert_eq!(navigator.login_redirects(), 1);
    }
}
