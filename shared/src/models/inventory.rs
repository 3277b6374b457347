//! Stock levels

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Live stock level for one consumable type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryRecord {
    pub id: i64,
    pub consumable_type_id: i64,
    /// May go negative after a purchase is deleted
    pub current_quantity: f64,
    pub custom_usage_rate: Option<f64>,
    pub last_updated: NaiveDateTime,
}

/// Absolute overwrite of a stock level
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryUpdate {
    #[validate(range(min = 0.0, message = "Quantity cannot be negative"))]
    pub current_quantity: f64,
    #[validate(range(min = 0.0, message = "Usage rate cannot be negative"))]
    pub custom_usage_rate: Option<f64>,
}

/// Set or clear the custom usage rate
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UsageRateUpdate {
    #[validate(range(min = 0.0, message = "Usage rate cannot be negative"))]
    pub usage_rate: Option<f64>,
}
