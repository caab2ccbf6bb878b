use serde::{Deserialize, Serialize};

/// User object the login page keeps in browser session storage.
///
/// The admin pages only check that one is present, so the payload is kept
/// as raw JSON rather than pinned to one login response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser(pub serde_json::Value);

impl SessionUser {
    /// Best-effort label for the header: first non-empty of
    /// `username`, `nama`, `name`, `email`.
    pub fn display_name(&self) -> Option<&str> {
        ["username", "nama", "name", "email"]
            .iter()
            .filter_map(|key| self.0.get(*key).and_then(|v| v.as_str()))
            .find(|v| !v.trim().is_empty())
    }
}
