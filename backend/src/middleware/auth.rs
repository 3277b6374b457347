//! Session cookie authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::error::AppError;
use crate::services::AuthService;
use crate::AppState;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "inv_session";

/// Build the session cookie set on login.
///
/// No `Max-Age` is sent; the token's own expiry bounds the session.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .build()
}

/// Cookie matching the session cookie's path, used to clear it
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Reject requests without a valid session cookie
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return AppError::Unauthorized("Authentication required".to_string()).into_response();
    };

    let auth_service = AuthService::new(&state.config);
    if let Err(err) = auth_service.validate_token(cookie.value()) {
        return err.into_response();
    }

    next.run(request).await
}
