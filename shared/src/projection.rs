//! Restock projection
//!
//! Turns a stock level and a usage rate into an estimate of how many days
//! are left, and classifies each consumable as needing purchase, running
//! low, or fine.

use serde::{Deserialize, Serialize};

use crate::types::UsagePeriod;

/// Items projected to run out within this many days are "low stock"
pub const LOW_STOCK_HORIZON_DAYS: i64 = 7;

/// Result of projecting one consumable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub daily_rate: f64,
    /// `None` when the item is never consumed
    pub days_until_empty: Option<i64>,
    pub needs_purchase: bool,
    pub low_stock: bool,
}

/// Usage per day for a rate expressed per `period`
pub fn daily_rate(usage_rate: f64, period: UsagePeriod) -> f64 {
    usage_rate / period.length_in_days()
}

/// Whole days until the stock runs out, or `None` if it never does
pub fn days_until_empty(current_quantity: f64, daily_rate: f64) -> Option<i64> {
    if daily_rate > 0.0 && daily_rate.is_finite() {
        Some((current_quantity / daily_rate).floor() as i64)
    } else {
        None
    }
}

/// Project a consumable. A missing quantity counts as zero.
pub fn project(
    current_quantity: Option<f64>,
    effective_usage_rate: f64,
    period: UsagePeriod,
    min_stock_level: f64,
) -> Projection {
    let quantity = current_quantity.unwrap_or(0.0);
    let daily = daily_rate(effective_usage_rate, period);
    let days = days_until_empty(quantity, daily);
    let needs_purchase = quantity <= min_stock_level;
    let low_stock = !needs_purchase && days.is_some_and(|d| d <= LOW_STOCK_HORIZON_DAYS);

    Projection {
        daily_rate: daily,
        days_until_empty: days,
        needs_purchase,
        low_stock,
    }
}

/// Short text shown next to an item on the dashboard
pub fn days_left_label(days_until_empty: Option<i64>) -> String {
    match days_until_empty {
        None => "N/A".to_string(),
        Some(days) if days <= 0 => "Empty!".to_string(),
        Some(days) => format!("{}d left", days),
    }
}

/// Visual urgency of a dashboard entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Urgent,
    Warning,
    Normal,
}

impl UrgencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Warning => "warning",
            UrgencyTier::Normal => "normal",
        }
    }
}

impl std::fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn urgency_tier(needs_purchase: bool, low_stock: bool, days_until_empty: Option<i64>) -> UrgencyTier {
    match days_until_empty {
        _ if needs_purchase => UrgencyTier::Urgent,
        Some(days) if days <= 0 => UrgencyTier::Urgent,
        _ if low_stock => UrgencyTier::Warning,
        Some(days) if days <= LOW_STOCK_HORIZON_DAYS => UrgencyTier::Warning,
        _ => UrgencyTier::Normal,
    }
}

impl Projection {
    pub fn label(&self) -> String {
        days_left_label(self.days_until_empty)
    }

    pub fn tier(&self) -> UrgencyTier {
        urgency_tier(self.needs_purchase, self.low_stock, self.days_until_empty)
    }
}
