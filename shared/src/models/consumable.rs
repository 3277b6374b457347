//! Consumable type definitions

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::UsagePeriod;

/// Definition of a trackable household good
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ConsumableType {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub unit: String,
    /// Quantity consumed per `usage_rate_period`
    pub default_usage_rate: f64,
    #[cfg_attr(feature = "sqlx", sqlx(try_from = "String"))]
    pub usage_rate_period: UsagePeriod,
    pub min_stock_level: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A consumable joined with its category and current stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ConsumableOverview {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub consumable: ConsumableType,
    pub category_name: String,
    pub category_icon: String,
    pub current_quantity: Option<f64>,
    pub custom_usage_rate: Option<f64>,
}

impl ConsumableOverview {
    /// Usage rate applied to projections: the override if present
    pub fn effective_usage_rate(&self) -> f64 {
        self.custom_usage_rate
            .unwrap_or(self.consumable.default_usage_rate)
    }
}

/// Input for creating or replacing a consumable type
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsumableInput {
    pub category_id: i64,
    #[validate(custom = "crate::validation::not_blank")]
    pub name: String,
    #[serde(default = "default_unit")]
    #[validate(length(min = 1, max = 50, message = "Unit must be 1-50 characters"))]
    pub unit: String,
    #[serde(default = "default_usage_rate")]
    #[validate(range(min = 0.0, message = "Usage rate cannot be negative"))]
    pub default_usage_rate: f64,
    #[serde(default)]
    pub usage_rate_period: UsagePeriod,
    #[serde(default = "default_min_stock_level")]
    #[validate(range(min = 0.0, message = "Minimum stock level cannot be negative"))]
    pub min_stock_level: f64,
    pub notes: Option<String>,
}

fn default_unit() -> String {
    "units".to_string()
}

fn default_usage_rate() -> f64 {
    1.0
}

fn default_min_stock_level() -> f64 {
    1.0
}
