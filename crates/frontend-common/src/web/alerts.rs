//! DOM alert region and `setTimeout` scheduler

use crate::notifier::{Alert, AlertId, AlertRegion, Scheduler};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tracing::error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// An inserted alert and the listener on its close button
#[derive(Debug)]
struct Shown {
    element: Element,
    _close: EventListener,
}

/// Inserts alerts at the top of the first element matching a selector.
///
/// Each region tracks the elements it inserted, so regions sharing a page
/// never remove each other's alerts.
#[derive(Debug, Clone)]
pub struct DomAlertRegion {
    selector: String,
    shown: Rc<RefCell<HashMap<AlertId, Shown>>>,
}

impl DomAlertRegion {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            shown: Rc::default(),
        }
    }
}

impl Default for DomAlertRegion {
    fn default() -> Self {
        Self::new(".container")
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn render(document: &Document, alert: &Alert) -> Result<Shown, JsValue> {
    let container = document.create_element("div")?;
    container.set_attribute("data-alert-id", &alert.id.to_string())?;
    container.set_class_name(&format!(
        "alert {} alert-dismissible fade show",
        alert.severity.css_class()
    ));
    container.set_attribute("role", "alert")?;

    let text = document.create_element("span")?;
    text.set_text_content(Some(&alert.message));
    container.append_child(&text)?;

    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Close")?;
    close.set_class_name("btn-close");
    container.append_child(&close)?;

    let target = container.clone();
    let listener = EventListener::new(&close, "click", move |_| target.remove());

    Ok(Shown {
        element: container,
        _close: listener,
    })
}

impl AlertRegion for DomAlertRegion {
    fn prepend(&self, alert: &Alert) -> bool {
        let Some(document) = document() else {
            return false;
        };
        let Ok(Some(host)) = document.query_selector(&self.selector) else {
            return false;
        };

        let inserted = render(&document, alert).and_then(|shown| {
            host.insert_before(&shown.element, host.first_child().as_ref())?;
            Ok(shown)
        });
        match inserted {
            Ok(shown) => {
                self.shown.borrow_mut().insert(alert.id, shown);
                true
            }
            Err(err) => {
                error!(error = %super::js_error_message(&err), "Failed to render alert");
                false
            }
        }
    }

    /// Also releases the close-button listener of an alert the user already closed
    fn remove(&self, id: AlertId) -> bool {
        let Some(shown) = self.shown.borrow_mut().remove(&id) else {
            return false;
        };
        let attached = shown.element.is_connected();
        shown.element.remove();
        attached
    }
}

/// Scheduler built on `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
