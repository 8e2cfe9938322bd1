//! Session authentication gate for protected routes

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::{
    error::AppError,
    session::{self, SESSION_COOKIE},
    state::AppState,
};

/// Where unauthenticated requests are sent
pub const LOGIN_PATH: &str = "/login";

/// Authenticated user information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub session_id: i64,
}

/// Capability check: a resolved identity, or the redirect to the login page
pub fn require_user(user: Option<CurrentUser>) -> Result<CurrentUser, Redirect> {
    user.ok_or_else(|| Redirect::to(LOGIN_PATH))
}

/// Authentication middleware
///
/// On success the resolved [`CurrentUser`] is placed in the request
/// extensions; otherwise the wrapped handler is never called.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(req.headers());

    let user = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.session_manager.resolve(cookie.value()).await?,
        None => None,
    };

    match require_user(user) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(redirect) => {
            debug!("Unauthenticated request to {}", req.uri().path());
            if jar.get(SESSION_COOKIE).is_some() {
                // stale or expired token
                return Ok((jar.remove(session::removal_cookie()), redirect).into_response());
            }
            Ok(redirect.into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    #[test]
    fn test_require_user_redirects_anonymous() {
        let response = require_user(None).unwrap_err().into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], LOGIN_PATH);
    }

    #[test]
    fn test_require_user_passes_identity_through() {
        let user = CurrentUser {
            id: 7,
            username: "alice".to_string(),
            session_id: 3,
        };

        assert_eq!(require_user(Some(user.clone())).unwrap(), user);
    }
}
