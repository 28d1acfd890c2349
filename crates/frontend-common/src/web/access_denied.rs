//! Access-denied page

use crate::auth::PageView;
use biblioteca_core::{AuthConfig, Role};
use tracing::error;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Replaces the document body with an access-denied panel linking home
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessDeniedPage;

fn render(document: &Document, required: Role) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    body.set_text_content(None);

    let panel = document.create_element("div")?;
    panel.set_class_name("access-denied");
    panel.set_attribute("role", "alert")?;

    let title = document.create_element("h2")?;
    title.set_text_content(Some("Access denied"));
    panel.append_child(&title)?;

    let message = document.create_element("p")?;
    message.set_class_name("lead");
    message.set_text_content(Some("You do not have permission to access this page."));
    panel.append_child(&message)?;

    let detail = document.create_element("p")?;
    detail.set_text_content(Some(&format!("Required role: {required}")));
    panel.append_child(&detail)?;

    let home = document.create_element("a")?;
    home.set_attribute("href", AuthConfig::HOME_PATH)?;
    home.set_class_name("btn btn-primary mt-3");
    home.set_text_content(Some("Back to home"));
    panel.append_child(&home)?;

    body.append_child(&panel)?;
    Ok(())
}

impl PageView for AccessDeniedPage {
    fn show_access_denied(&self, required: Role) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Err(err) = render(&document, required) {
            error!(error = %super::js_error_message(&err), "Failed to render access-denied page");
        }
    }
}
