//! Dashboard handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::{DashboardItem, InventoryStats};
use crate::services::DashboardService;
use crate::AppState;

/// Projected stock for every consumable, most urgent first
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<Vec<DashboardItem>>> {
    let service = DashboardService::new(state.db);
    Ok(Json(service.dashboard().await?))
}

/// Headline counts
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<InventoryStats>> {
    let service = DashboardService::new(state.db);
    Ok(Json(service.stats().await?))
}
