//! HTTP handlers for stock level endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::extract::{Path, ValidatedJson};
use crate::models::{InventoryRecord, InventoryUpdate, UsageRateUpdate};
use crate::services::InventoryService;
use crate::AppState;

/// Overwrite a consumable's stock level
pub async fn update_inventory(
    State(state): State<AppState>,
    Path(consumable_id): Path<i64>,
    ValidatedJson(input): ValidatedJson<InventoryUpdate>,
) -> AppResult<Json<InventoryRecord>> {
    let service = InventoryService::new(state.db);
    let record = service.set_quantity(consumable_id, input).await?;
    Ok(Json(record))
}

/// Set or clear a consumable's custom usage rate
pub async fn update_usage_rate(
    State(state): State<AppState>,
    Path(consumable_id): Path<i64>,
    ValidatedJson(input): ValidatedJson<UsageRateUpdate>,
) -> AppResult<Json<InventoryRecord>> {
    let service = InventoryService::new(state.db);
    let record = service.set_usage_rate(consumable_id, input).await?;
    Ok(Json(record))
}
