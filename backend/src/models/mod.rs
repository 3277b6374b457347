//! Data models
//!
//! The API types live in the shared crate so the browser client can use them too

pub use shared::models::*;
pub use shared::types::{HistoryQuery, UsagePeriod};
