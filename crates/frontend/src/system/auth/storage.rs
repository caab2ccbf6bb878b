use contracts::system::auth::SessionUser;
use serde_json::Value;
use web_sys::window;

use crate::config::config;

/// Source of the logged-in user. Injected so pages can be exercised
/// without a real browser store.
pub trait SessionProvider {
    fn current_user(&self) -> Option<SessionUser>;
}

/// Reads the user object the login page stored in `sessionStorage`.
#[derive(Clone, Debug)]
pub struct BrowserSessionStorage {
    key: String,
}

impl BrowserSessionStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Uses the key from [`crate::config::SessionConfig`]
    pub fn from_config() -> Self {
        Self::new(config().session.storage_key.clone())
    }
}

impl Default for BrowserSessionStorage {
    fn default() -> Self {
        Self::from_config()
    }
}

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

impl SessionProvider for BrowserSessionStorage {
    fn current_user(&self) -> Option<SessionUser> {
        let raw = get_session_storage()?.get_item(&self.key).ok()??;
        parse_session_user(&raw)
    }
}

/// Decode a stored user. Falsy JSON (`null`, `false`, `0`, `""`) and
/// malformed values count as no session.
pub fn parse_session_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if is_falsy(&value) => None,
        Ok(value) => Some(SessionUser(value)),
        Err(e) => {
            log::warn!("Ignoring unreadable session user: {}", e);
            None
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |v| v == 0.0 || v.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_user() {
        let user = parse_session_user(r#"{"id": 1, "username": "admin"}"#);
        assert_eq!(user.as_ref().and_then(|u| u.display_name()), Some("admin"));

        assert!(parse_session_user("null").is_none());
        assert!(parse_session_user("").is_none());
        assert!(parse_session_user("{not json").is_none());
        assert!(parse_session_user("false").is_none());
        assert!(parse_session_user("0").is_none());
        assert!(parse_session_user("0.0").is_none());
        assert!(parse_session_user(r#""""#).is_none());

        assert!(parse_session_user("true").is_some());
        assert!(parse_session_user(r#""kasir""#).is_some());
    }
}
