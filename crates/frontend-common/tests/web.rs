//! Browser tests for the web bindings

#![cfg(target_arch = "wasm32")]

use biblioteca_core::tests::StorageBackendTestSuite;
use biblioteca_core::{Durability, Navigator, Role, UserSession};
use biblioteca_frontend_common::web::{
    BrowserNavigator, DomAlertRegion, WebStorage, browser_session_store,
};
use biblioteca_frontend_common::{ManualScheduler, Notifier, Severity};
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_session_storage_conformance() {
    StorageBackendTestSuite::new(WebStorage::session().unwrap()).run_all_tests();
}

#[wasm_bindgen_test]
fn test_local_storage_conformance() {
    StorageBackendTestSuite::new(WebStorage::local().unwrap()).run_all_tests();
}

#[wasm_bindgen_test]
fn test_browser_store_round_trip() {
    let store = browser_session_store().with_key("web-test-session");
    let session = UserSession::new("t1", "maria", Role::Librarian);

    store.write(&session, Durability::Persistent).unwrap();
    assert_eq!(store.read(), Some(session));

    store.clear();
    assert_eq!(store.read(), None);
}

#[wasm_bindgen_test]
fn test_navigator_reports_path() {
    assert!(BrowserNavigator.current_path().starts_with('/'));
}

#[wasm_bindgen_test]
fn test_notifier_without_host_region() {
    let scheduler = Rc::new(ManualScheduler::new());
    let notifier = Notifier::new(Rc::new(DomAlertRegion::new("#no-such-region")), scheduler.clone());

    assert_eq!(notifier.show("hello", Severity::Info), None);
    assert!(scheduler.pending_delays().is_empty());
}

#[wasm_bindgen_test]
fn test_alert_region_insert_and_remove() {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_id("web-test-alerts");
    document.body().unwrap().append_child(&host).unwrap();

    let scheduler = Rc::new(ManualScheduler::new());
    let notifier = Notifier::new(Rc::new(DomAlertRegion::new("#web-test-alerts")), scheduler.clone());

    let id = notifier.show("Book <b>saved</b>", Severity::Success).unwrap();
    let element = host.first_element_child().unwrap();
    assert!(element.class_name().contains("alert-success"));
    assert_eq!(element.text_content().as_deref(), Some("Book <b>saved</b>"));

    assert!(notifier.dismiss(id));
    scheduler.run_pending();
    assert!(host.first_element_child().is_none());
    host.remove();
}

#[wasm_bindgen_test]
fn test_two_notifiers_keep_their_own_alerts() {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_id("web-test-shared-alerts");
    document.body().unwrap().append_child(&host).unwrap();

    let scheduler = Rc::new(ManualScheduler::new());
    let first = Notifier::new(Rc::new(DomAlertRegion::new("#web-test-shared-alerts")), scheduler.clone());
    let second = Notifier::new(Rc::new(DomAlertRegion::new("#web-test-shared-alerts")), scheduler.clone());

    let id = first.show("from first", Severity::Info).unwrap();
    let other = second.show("from second", Severity::Info).unwrap();
    assert_eq!(id, other);

    assert!(second.dismiss(other));
    assert_eq!(host.child_element_count(), 1);
    assert_eq!(
        host.first_element_child().unwrap().text_content().as_deref(),
        Some("from first")
    );

    assert!(first.dismiss(id));
    assert_eq!(host.child_element_count(), 0);
    host.remove();
}
