//! HTTP handlers for consumable type endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{Path, Query, ValidatedJson};
use crate::handlers::{CreatedResponse, SuccessResponse};
use crate::models::{ConsumableInput, ConsumableOverview};
use crate::services::ConsumableService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ConsumableFilter {
    pub category_id: Option<i64>,
}

/// List consumables, optionally for one category
pub async fn list_consumables(
    State(state): State<AppState>,
    Query(filter): Query<ConsumableFilter>,
) -> AppResult<Json<Vec<ConsumableOverview>>> {
    let service = ConsumableService::new(state.db);
    let items = service.list(filter.category_id).await?;
    Ok(Json(items))
}

/// Get one consumable
pub async fn get_consumable(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ConsumableOverview>> {
    let service = ConsumableService::new(state.db);
    Ok(Json(service.get(id).await?))
}

/// Create a consumable
pub async fn create_consumable(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ConsumableInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let service = ConsumableService::new(state.db);
    let id = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Update a consumable
pub async fn update_consumable(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(input): ValidatedJson<ConsumableInput>,
) -> AppResult<Json<SuccessResponse>> {
    let service = ConsumableService::new(state.db);
    service.update(id, input).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Delete a consumable
pub async fn delete_consumable(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    let service = ConsumableService::new(state.db);
    service.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
