//! Common types used across the platform

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time period a usage rate is expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UsagePeriod {
    Day,
    #[default]
    Week,
    Month,
}

impl UsagePeriod {
    pub const ALL: [UsagePeriod; 3] = [UsagePeriod::Day, UsagePeriod::Week, UsagePeriod::Month];

    /// Number of days one period spans; always positive
    pub fn length_in_days(&self) -> f64 {
        match self {
            UsagePeriod::Day => 1.0,
            UsagePeriod::Week => 7.0,
            UsagePeriod::Month => 30.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UsagePeriod::Day => "day",
            UsagePeriod::Week => "week",
            UsagePeriod::Month => "month",
        }
    }
}

impl std::fmt::Display for UsagePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown usage period: {0}")]
pub struct UnknownPeriod(pub String);

impl FromStr for UsagePeriod {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(UsagePeriod::Day),
            "week" => Ok(UsagePeriod::Week),
            "month" => Ok(UsagePeriod::Month),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

/// Stored period strings outside the known set are read as weekly.
impl From<String> for UsagePeriod {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Query parameters for purchase and usage history listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub consumable_id: Option<i64>,
    pub limit: Option<u32>,
}

impl HistoryQuery {
    pub const DEFAULT_LIMIT: u32 = 50;
    pub const MAX_LIMIT: u32 = 500;

    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}
