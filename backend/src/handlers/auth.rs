//! Authentication handlers

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::handlers::SuccessResponse;
use crate::middleware::{removal_cookie, session_cookie, SESSION_COOKIE};
use crate::services::AuthService;
use crate::AppState;

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let auth_service = AuthService::new(&state.config);
    let token = auth_service.login(&body.password, &state.password_hash)?;

    let jar = jar.add(session_cookie(token, state.config.auth.secure_cookie));
    Ok((jar, Json(SuccessResponse::ok())))
}

/// Logout endpoint handler
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<SuccessResponse>) {
    (jar.remove(removal_cookie()), Json(SuccessResponse::ok()))
}

/// Report whether the request carries a valid session
pub async fn check_auth(State(state): State<AppState>, jar: CookieJar) -> Json<AuthStatus> {
    let authenticated = jar
        .get(SESSION_COOKIE)
        .map(|cookie| {
            AuthService::new(&state.config)
                .validate_token(cookie.value())
                .is_ok()
        })
        .unwrap_or(false);

    Json(AuthStatus { authenticated })
}
