//! WebAssembly module for the household inventory client
//!
//! Provides client-side computation for:
//! - Restock projections and dashboard labels
//! - Urgency classification of dashboard rows
//! - Explicit view state with cached list snapshots

use serde::{Deserialize, Serialize};
use shared::{days_left_label as label_for, project, urgency_tier as tier_for, DashboardItem, UsagePeriod};
use wasm_bindgen::prelude::*;

mod view_state;

pub use view_state::{View, ViewState};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("household inventory client loaded");
}

/// Write a line to the browser console
pub(crate) fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Input accepted by [`project_consumable`]
#[derive(Debug, Deserialize)]
struct ProjectionInput {
    current_quantity: Option<f64>,
    usage_rate: f64,
    #[serde(default)]
    usage_rate_period: UsagePeriod,
    min_stock_level: f64,
}

#[derive(Debug, Serialize)]
struct ProjectionOutput {
    daily_rate: f64,
    days_until_empty: Option<i64>,
    needs_purchase: bool,
    low_stock: bool,
    label: String,
    tier: &'static str,
}

/// Classification of one dashboard row
#[derive(Debug, Serialize, PartialEq)]
struct RowClass {
    id: i64,
    label: String,
    tier: &'static str,
}

fn project_json(json: &str) -> Result<String, String> {
    let input: ProjectionInput =
        serde_json::from_str(json).map_err(|e| format!("Invalid projection input: {}", e))?;
    let projection = project(
        input.current_quantity,
        input.usage_rate,
        input.usage_rate_period,
        input.min_stock_level,
    );

    let output = ProjectionOutput {
        daily_rate: projection.daily_rate,
        days_until_empty: projection.days_until_empty,
        needs_purchase: projection.needs_purchase,
        low_stock: projection.low_stock,
        label: projection.label(),
        tier: projection.tier().as_str(),
    };
    serde_json::to_string(&output).map_err(|e| e.to_string())
}

fn classify_json(json: &str) -> Result<String, String> {
    let items: Vec<DashboardItem> =
        serde_json::from_str(json).map_err(|e| format!("Invalid dashboard JSON: {}", e))?;

    let rows: Vec<RowClass> = items
        .iter()
        .map(|item| RowClass {
            id: item.overview.consumable.id,
            label: label_for(item.days_until_empty),
            tier: tier_for(item.needs_purchase, item.low_stock, item.days_until_empty).as_str(),
        })
        .collect();
    serde_json::to_string(&rows).map_err(|e| e.to_string())
}

fn whole_days(days: Option<f64>) -> Option<i64> {
    days.filter(|d| d.is_finite()).map(|d| d.floor() as i64)
}

/// Project one consumable from
/// `{current_quantity?, usage_rate, usage_rate_period, min_stock_level}`
#[wasm_bindgen]
pub fn project_consumable(json: &str) -> Result<String, JsValue> {
    project_json(json).map_err(|e| JsValue::from_str(&e))
}

/// "Empty!", "N/A" or "{n}d left"
#[wasm_bindgen]
pub fn days_left_label(days_until_empty: Option<f64>) -> String {
    label_for(whole_days(days_until_empty))
}

/// "urgent", "warning" or "normal"
#[wasm_bindgen]
pub fn urgency_tier(needs_purchase: bool, low_stock: bool, days_until_empty: Option<f64>) -> String {
    tier_for(needs_purchase, low_stock, whole_days(days_until_empty))
        .as_str()
        .to_string()
}

/// Label and tier for each item of a `/api/dashboard` response
#[wasm_bindgen]
pub fn classify_dashboard(json: &str) -> Result<String, JsValue> {
    classify_json(json).map_err(|e| JsValue::from_str(&e))
}
