//! Business logic services for the household inventory tracker

pub mod auth;
pub mod backup;
pub mod category;
pub mod consumable;
pub mod dashboard;
pub mod inventory;
pub mod purchase;
pub mod usage;

pub use auth::AuthService;
pub use backup::BackupService;
pub use category::CategoryService;
pub use consumable::ConsumableService;
pub use dashboard::DashboardService;
pub use inventory::InventoryService;
pub use purchase::PurchaseService;
pub use usage::UsageService;
