//! The authenticated user record

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access level carried by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[serde(alias = "BIBLIOTECARIO")]
    Librarian,
    #[serde(alias = "USUARIO")]
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Self::Admin, Self::Librarian, Self::User];

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Librarian => "LIBRARIAN",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a role name that is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "LIBRARIAN" | "BIBLIOTECARIO" => Ok(Self::Librarian),
            "USER" | "USUARIO" => Ok(Self::User),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Where a session is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Durability {
    /// Cleared when the browsing session ends
    #[default]
    Ephemeral,
    /// Survives browser restarts ("remember me")
    Persistent,
}

impl Durability {
    /// Map the login form's "remember me" checkbox
    pub fn from_remember_me(remember_me: bool) -> Self {
        if remember_me {
            Self::Persistent
        } else {
            Self::Ephemeral
        }
    }
}

/// Authenticated user as returned by the auth endpoints and kept in browser storage.
///
/// Sessions are replace-only: a new login writes a whole new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, alias = "usuario")]
    pub username: String,
    #[serde(default, alias = "nome", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `None` when the record has no role or one this client doesn't know
    #[serde(
        default,
        alias = "perfil",
        alias = "nivel",
        deserialize_with = "deserialize_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(name)) => match name.parse() {
            Ok(role) => Some(role),
            Err(UnknownRole(name)) => {
                tracing::debug!(%name, "Ignoring unknown role");
                None
            }
        },
        Some(other) => {
            tracing::debug!(value = %other, "Ignoring non-string role");
            None
        }
        None => None,
    })
}

impl UserSession {
    /// Create a session with only the required fields
    pub fn new(token: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            id: None,
            username: username.into(),
            display_name: None,
            email: None,
            role: Some(role),
        }
    }

    /// Whether the session carries exactly `role`
    pub fn is(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// A session only authenticates requests when its token is non-empty
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Name to show in the UI, falling back to the username (possibly empty)
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}
