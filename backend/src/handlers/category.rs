//! Category handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::Category;
use crate::services::CategoryService;
use crate::AppState;

/// List all categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryService::new(state.db).list().await?;
    Ok(Json(categories))
}
