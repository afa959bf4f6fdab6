//! Request Authentication Gate
//!
//! One suspended session lookup per request: pull the token off the
//! request, ask the [`SessionProvider`] who the bearer is, branch on
//! presence. Page handlers take a [`CurrentUser`] argument and never see
//! an unauthenticated request; the extractor's rejection redirects the
//! browser to /login before any page output is produced.
//!
//! A provider failure is not "no session". It propagates as a server
//! error so a flaky identity service can never bounce signed-in users to
//! the login page.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::{AuthError, AuthSession, SessionProvider, SessionUser};
use crate::web::error::WebError;
use crate::web::state::AppState;

/// Default name of the session cookie issued by the login flow
pub const DEFAULT_SESSION_COOKIE: &str = "gms_session";

/// Resolve the session for a request.
///
/// The explicit outcome: callers decide what absence means. Page routes
/// redirect, API routes could 401, tests assert directly.
pub async fn authenticate(
    headers: &HeaderMap,
    cookie_name: &str,
    sessions: &dyn SessionProvider,
) -> Result<AuthSession, AuthError> {
    let Some(token) = session_token(headers, cookie_name) else {
        return Ok(AuthSession::Unauthenticated);
    };

    Ok(match sessions.current_user(&token).await? {
        Some(user) => AuthSession::Authenticated(user),
        None => AuthSession::Unauthenticated,
    })
}

/// Extract the session token: Authorization bearer first, cookie second.
fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Ok(text) = value.to_str() {
            // Scheme names are case-insensitive (RFC 7235).
            if let Some((scheme, token)) = text.split_once(' ') {
                if scheme.eq_ignore_ascii_case("bearer") {
                    let token = token.trim();
                    if !token.is_empty() {
                        return Some(token.to_string());
                    }
                }
            }
        }
    }

    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name && !value.is_empty()).then(|| value.to_string())
    })
}

/// The authenticated user for the current request.
///
/// The rejection is the gate itself: handlers that take this extractor
/// are only ever called with a live session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = GateRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_name = &state.config.auth.session_cookie;
        match authenticate(&parts.headers, cookie_name, state.sessions.as_ref()).await {
            Ok(AuthSession::Authenticated(user)) => Ok(CurrentUser(user)),
            Ok(AuthSession::Unauthenticated) => Err(GateRejection::LoginRedirect),
            Err(error) => Err(GateRejection::Provider(error)),
        }
    }
}

/// Outcome for requests that never reach the handler
#[derive(Debug)]
pub enum GateRejection {
    /// No session: send the browser to the login page
    LoginRedirect,
    /// The lookup itself failed; surfaces as a server error
    Provider(AuthError),
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            GateRejection::LoginRedirect => Redirect::to("/login").into_response(),
            GateRejection::Provider(error) => WebError::from(error).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticSessions;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn test_sessions() -> StaticSessions {
        StaticSessions::new().with_user(
            "tok-1",
            SessionUser {
                id: Uuid::new_v4(),
                email: "kim@gilnokie.co.za".to_string(),
            },
        )
    }

    #[test]
    fn test_bearer_token_wins_over_cookie() {
        let mut headers = headers_with(header::AUTHORIZATION, "Bearer from-header");
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("gms_session=from-cookie"),
        );
        assert_eq!(
            session_token(&headers, DEFAULT_SESSION_COOKIE),
            Some("from-header".to_string())
        );
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        for auth in ["Bearer tok-1", "bearer tok-1", "BEARER tok-1"] {
            assert_eq!(
                session_token(
                    &headers_with(header::AUTHORIZATION, auth),
                    DEFAULT_SESSION_COOKIE
                ),
                Some("tok-1".to_string()),
            );
        }
    }

    #[test]
    fn test_cookie_token_by_configured_name() {
        let headers = headers_with(
            header::COOKIE,
            "theme=dark; gms_session=tok-1; locale=en-ZA",
        );
        assert_eq!(
            session_token(&headers, DEFAULT_SESSION_COOKIE),
            Some("tok-1".to_string())
        );
        assert_eq!(session_token(&headers, "other_cookie"), None);
    }

    #[test]
    fn test_empty_and_malformed_tokens_are_absent() {
        assert_eq!(
            session_token(
                &headers_with(header::AUTHORIZATION, "Bearer   "),
                DEFAULT_SESSION_COOKIE
            ),
            None
        );
        assert_eq!(
            session_token(
                &headers_with(header::AUTHORIZATION, "Basic dXNlcjpwdw=="),
                DEFAULT_SESSION_COOKIE
            ),
            None
        );
        assert_eq!(
            session_token(
                &headers_with(header::COOKIE, "gms_session="),
                DEFAULT_SESSION_COOKIE
            ),
            None
        );
        assert_eq!(session_token(&HeaderMap::new(), DEFAULT_SESSION_COOKIE), None);
    }

    #[tokio::test]
    async fn test_authenticate_resolves_session() {
        let sessions = test_sessions();
        let headers = headers_with(header::AUTHORIZATION, "Bearer tok-1");

        let session = authenticate(&headers, DEFAULT_SESSION_COOKIE, &sessions)
            .await
            .unwrap();
        assert_eq!(session.user().unwrap().email, "kim@gilnokie.co.za");
    }

    #[tokio::test]
    async fn test_authenticate_without_token_is_unauthenticated() {
        let sessions = test_sessions();
        let session = authenticate(&HeaderMap::new(), DEFAULT_SESSION_COOKIE, &sessions)
            .await
            .unwrap();
        assert_eq!(session, AuthSession::Unauthenticated);
    }

    #[tokio::test]
    async fn test_authenticate_with_stale_token_is_unauthenticated() {
        let sessions = test_sessions();
        let headers = headers_with(header::AUTHORIZATION, "Bearer revoked");

        let session = authenticate(&headers, DEFAULT_SESSION_COOKIE, &sessions)
            .await
            .unwrap();
        assert!(!session.is_authenticated());
    }
}
