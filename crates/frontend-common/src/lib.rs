//! Session gate, notifications and browser bindings for the library frontend

pub mod auth;
pub mod notifier;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use auth::{AuthGate, MemoryPageView, PageAccess, PageView};
pub use biblioteca_core::{AuthConfig, Durability, Role, UserSession};
pub use biblioteca_http::{ApiClient, ApiConfig, ClientError};
pub use notifier::{
    Alert, AlertId, AlertRegion, ManualScheduler, MemoryAlertRegion, Notifier, Scheduler, Severity,
};
