//! Purchase log models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A logged restocking event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Purchase {
    pub id: i64,
    pub consumable_type_id: i64,
    pub quantity: f64,
    pub purchase_date: NaiveDate,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Purchase with the consumable's display fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseEntry {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub purchase: Purchase,
    pub consumable_name: String,
    pub unit: String,
}

/// Input for logging a purchase
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPurchase {
    pub consumable_type_id: i64,
    pub quantity: f64,
    /// Defaults to today
    pub purchase_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub notes: Option<String>,
}
