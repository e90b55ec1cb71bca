/*
[INPUT]:  Login credentials and the CSRF token issued at login
[OUTPUT]: Session state shared by every clone of a client
[POS]:    Auth layer - session lifecycle management
[UPDATE]: When adding session refresh or changing storage strategy
*/

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// How the client authenticates at `/login`.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Password { username: String, password: String },
    Token { username: String, token: String },
}

impl Credentials {
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn token(username: impl Into<String>, token: impl Into<String>) -> Self {
        Credentials::Token {
            username: username.into(),
            token: token.into(),
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Credentials::Password { username, .. } | Credentials::Token { username, .. } => {
                username
            }
        }
    }

    /// JSON body posted to `/login`.
    pub fn login_body(&self) -> serde_json::Value {
        match self {
            Credentials::Password { username, password } => serde_json::json!({
                "username": username,
                "password": password,
            }),
            Credentials::Token { username, token } => serde_json::json!({
                "username": username,
                "token": token,
            }),
        }
    }
}

// Secrets never reach logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Credentials::Password { .. } => "Password",
            Credentials::Token { .. } => "Token",
        };
        f.debug_struct(kind)
            .field("username", &self.username())
            .finish_non_exhaustive()
    }
}

/// Session data captured at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub csrf_token: Option<String>,
    pub username: String,
    pub established_at: DateTime<Utc>,
}

/// Thread-safe session store
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    data: Arc<RwLock<Option<SessionToken>>>,
}

impl SessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, csrf_token: Option<String>, username: impl Into<String>) {
        let token = SessionToken {
            csrf_token,
            username: username.into(),
            established_at: Utc::now(),
        };
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token);
    }

    pub fn csrf_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().and_then(|data| data.csrf_token.clone())
    }

    pub fn is_active(&self) -> bool {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.is_some()
    }

    pub fn token(&self) -> Option<SessionToken> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = SessionStore::new();
        assert!(!store.is_active());
        assert!(store.csrf_token().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let store = SessionStore::new();
        store.set(Some("csrf-123".to_string()), "admin");

        assert!(store.is_active());
        assert_eq!(store.csrf_token(), Some("csrf-123".to_string()));
        assert_eq!(store.token().map(|t| t.username), Some("admin".to_string()));

        store.clear();
        assert!(!store.is_active());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let clone = store.clone();
        store.set(None, "admin");
        assert!(clone.is_active());
        assert!(clone.csrf_token().is_none());
    }

    #[test]
    fn test_login_body_shapes() {
        let body = Credentials::password("admin", "s3cret").login_body();
        assert_eq!(body, serde_json::json!({"username": "admin", "password": "s3cret"}));

        let body = Credentials::token("admin", "tok").login_body();
        assert_eq!(body, serde_json::json!({"username": "admin", "token": "tok"}));
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", Credentials::password("admin", "s3cret"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("s3cret"));
    }
}
