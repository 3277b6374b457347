//! HTTP handlers for the usage log

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::extract::{Query, ValidatedJson};
use crate::handlers::CreatedResponse;
use crate::models::{HistoryQuery, NewUsage, UsageEntry};
use crate::services::UsageService;
use crate::AppState;

pub async fn list_usage(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<UsageEntry>>> {
    let service = UsageService::new(state.db);
    Ok(Json(service.list(query).await?))
}

pub async fn create_usage(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewUsage>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let service = UsageService::new(state.db);
    let id = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}
