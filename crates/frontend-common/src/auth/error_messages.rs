//! User-friendly error message mappings

use biblioteca_http::ClientError;

/// Convert client errors to messages fit for an alert
pub fn get_user_friendly_error(error: &ClientError) -> String {
    match error {
        ClientError::SessionExpired { .. } => {
            "Your session has expired. Please log in again.".to_string()
        }
        // Server should provide user-friendly messages for rejected credentials
        ClientError::AuthenticationFailed { message, .. } => message.clone(),
        ClientError::Transport(_) => {
            "Could not reach the server. Check your connection and try again.".to_string()
        }
        ClientError::RequestFailed { status, .. } => format!("Request failed (HTTP {status})"),
        other => other.to_string(),
    }
}
