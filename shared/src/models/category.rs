//! Category reference data

use serde::{Deserialize, Serialize};

/// A grouping of consumables, e.g. "Household" or "Food & Pantry"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
}
