//! `window.location` navigation

use biblioteca_core::Navigator;
use tracing::error;

/// Navigator backed by the window's location
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn assign(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(href) {
            error!(href, error = %super::js_error_message(&err), "Navigation failed");
        }
    }
}

/// Host name of the current page, empty outside a window
pub fn current_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}
