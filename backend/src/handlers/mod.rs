//! HTTP handlers, one module per resource

use serde::Serialize;

mod auth;
mod backup;
mod category;
mod consumable;
mod dashboard;
mod health;
mod inventory;
mod purchase;
mod usage;

pub use auth::*;
pub use backup::*;
pub use category::*;
pub use consumable::*;
pub use dashboard::*;
pub use health::*;
pub use inventory::*;
pub use purchase::*;
pub use usage::*;

/// Body of mutation responses that carry no data
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of a 201 response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub success: bool,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self { id, success: true }
    }
}
