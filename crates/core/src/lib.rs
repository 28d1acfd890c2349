//! Library client core types: the stored user session, storage backends and navigation

pub mod config;
pub mod error;
pub mod navigator;
pub mod session;
pub mod storage;
pub mod store;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use config::AuthConfig;
pub use error::{SessionError, StorageError};
pub use navigator::{MemoryNavigator, Navigator};
pub use session::{Durability, Role, UnknownRole, UserSession};
pub use storage::{MemoryStorage, StorageBackend};
pub use store::SessionStore;
