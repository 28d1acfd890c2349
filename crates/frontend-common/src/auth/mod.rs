//! Authentication module

pub mod error_messages;
pub mod gate;

// Re-export commonly used items
pub use error_messages::get_user_friendly_error;
pub use gate::{AuthGate, MemoryPageView, PageAccess, PageView};
