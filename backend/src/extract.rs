//! Request extractors that report failures as `AppError`
//!
//! axum's own extractors answer bad input with plain-text 400/415/422
//! responses; these wrap them so every rejection uses the JSON error body.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and then checked with `validator`.
///
/// Malformed JSON, wrong field types and missing fields become a 400
/// `VALIDATION_ERROR` instead of axum's default 415/422 rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameters; `/api/purchases/abc` is a `VALIDATION_ERROR`
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string; `?limit=abc` is a `VALIDATION_ERROR`
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
        Ok(Self(value))
    }
}
