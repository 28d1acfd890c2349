//! Browser bindings: web storage, window navigation, DOM alerts and logging

mod access_denied;
mod alerts;
mod logging;
mod navigator;
mod storage;

pub use access_denied::AccessDeniedPage;
pub use alerts::{DomAlertRegion, TimeoutScheduler};
pub use logging::init_logging;
pub use navigator::{BrowserNavigator, current_hostname};
pub use storage::{WebStorage, browser_session_store};

use crate::auth::AuthGate;
use crate::notifier::Notifier;
use biblioteca_core::Navigator;
use biblioteca_http::{ApiClient, ApiConfig, ClientError};
use std::rc::Rc;
use tracing::info;
use wasm_bindgen::JsValue;

/// Everything a page needs, wired to the current window
pub struct BrowserApp {
    pub auth: AuthGate,
    pub notifier: Notifier,
}

/// Build the auth gate and notifier for the current page.
///
/// The API base URL is chosen from `window.location.hostname`.
pub fn bootstrap() -> Result<BrowserApp, ClientError> {
    let config = ApiConfig::for_host(&current_hostname());
    info!(base_url = %config.base_url, "API configured");

    let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);
    let client = ApiClient::builder()
        .config(config)
        .sessions(browser_session_store())
        .navigator(navigator)
        .build()?;

    Ok(BrowserApp {
        auth: AuthGate::new(client, Rc::new(AccessDeniedPage)),
        notifier: Notifier::new(Rc::new(DomAlertRegion::default()), Rc::new(TimeoutScheduler)),
    })
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
