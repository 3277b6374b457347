//! HTTP handlers for purchase history endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::extract::{Path, Query, ValidatedJson};
use crate::handlers::{CreatedResponse, SuccessResponse};
use crate::models::{HistoryQuery, NewPurchase, PurchaseEntry};
use crate::services::PurchaseService;
use crate::AppState;

/// List purchases, newest first
pub async fn list_purchases(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<PurchaseEntry>>> {
    let service = PurchaseService::new(state.db);
    Ok(Json(service.list(query).await?))
}

/// Log a purchase
pub async fn create_purchase(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewPurchase>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let service = PurchaseService::new(state.db);
    let id = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Delete a purchase and reverse its stock increment
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SuccessResponse>> {
    let service = PurchaseService::new(state.db);
    service.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
