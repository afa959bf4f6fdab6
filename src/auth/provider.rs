//! Session provider seam
//!
//! Handlers depend on this trait rather than on the HTTP client directly,
//! so the dashboard runs against an in-memory session table in
//! development and in tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::auth::{AuthError, SessionUser};

/// Resolves a session token to the current user.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Look up the user for `token`.
    ///
    /// `Ok(None)` means no valid session exists for the token; `Err` means
    /// the lookup itself could not be completed.
    async fn current_user(&self, token: &str) -> Result<Option<SessionUser>, AuthError>;
}

/// Fixed token-to-user table for development and tests.
#[derive(Debug, Default)]
pub struct StaticSessions {
    users: HashMap<String, SessionUser>,
}

impl StaticSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session token for a user (builder style).
    pub fn with_user(mut self, token: impl Into<String>, user: SessionUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl SessionProvider for StaticSessions {
    async fn current_user(&self, token: &str) -> Result<Option<SessionUser>, AuthError> {
        Ok(self.users.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_user(email: &str) -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_static_sessions_lookup() {
        let sessions = StaticSessions::new()
            .with_user("tok-1", test_user("kim@gilnokie.co.za"))
            .with_user("tok-2", test_user("sipho@gilnokie.co.za"));
        assert_eq!(sessions.len(), 2);

        let found = sessions.current_user("tok-2").await.unwrap();
        assert_eq!(found.unwrap().email, "sipho@gilnokie.co.za");
    }

    #[tokio::test]
    async fn test_static_sessions_miss_is_none_not_error() {
        let sessions = StaticSessions::new();
        assert!(sessions.is_empty());
        let found = sessions.current_user("unknown").await.unwrap();
        assert!(found.is_none());
    }
}
