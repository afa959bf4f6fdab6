//! Session Lookup
//!
//! The dashboard never manages credentials itself. Each request carries a
//! session token, and this module answers one question about it: who is
//! the bearer? Everything else (sign-in, sign-out, token issuance) lives
//! in the external identity service.
//!
//! - [`SessionProvider`]: the lookup seam handlers depend on
//! - [`IdentityClient`]: production provider over HTTP
//! - [`StaticSessions`]: in-memory provider for development and tests

mod client;
mod provider;

pub use client::{IdentityClient, IdentityConfig};
pub use provider::{SessionProvider, StaticSessions};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The authenticated principal behind a request.
///
/// Read-only in this tier: resolved from the identity service at request
/// time, rendered into the shell, never stored or mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Identity service's stable user id
    pub id: Uuid,
    /// Email shown in the header, exactly as the identity service holds it
    pub email: String,
}

/// Outcome of a session lookup.
///
/// Absence of a session is a normal outcome, not an error; lookup
/// failures travel separately as [`AuthError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSession {
    /// A valid session exists for the request
    Authenticated(SessionUser),
    /// No token was presented, or the token no longer maps to a user
    Unauthenticated,
}

impl AuthSession {
    /// The session user, when one exists.
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthSession::Authenticated(user) => Some(user),
            AuthSession::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthSession::Authenticated(_))
    }
}

/// Failures of the lookup itself. These surface as server errors, never
/// as a silent redirect to the login page.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Identity service did not answer in time
    #[error("identity service timed out")]
    Timeout,

    /// Identity service refused the connection or reported itself down
    #[error("identity service unavailable")]
    Unavailable,

    /// Transport-level failure talking to the identity service
    #[error("identity request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Identity service answered with a status outside its contract
    #[error("identity service returned unexpected status {0}")]
    UnexpectedStatus(u16),

    /// Identity service answered 200 with a body we cannot use
    #[error("malformed identity payload: {0}")]
    MalformedPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_accessor() {
        let user = SessionUser {
            id: Uuid::new_v4(),
            email: "kim@gilnokie.co.za".to_string(),
        };
        let session = AuthSession::Authenticated(user.clone());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&user));
        assert_eq!(AuthSession::Unauthenticated.user(), None);
    }
}
