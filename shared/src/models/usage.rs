//! Usage log models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A logged consumption event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UsageLogEntry {
    pub id: i64,
    pub consumable_type_id: i64,
    pub quantity_used: f64,
    pub usage_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UsageEntry {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub usage: UsageLogEntry,
    pub consumable_name: String,
    pub unit: String,
}

/// Input for logging consumption
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUsage {
    pub consumable_type_id: i64,
    pub quantity_used: f64,
    pub usage_date: Option<NaiveDate>,
    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}
