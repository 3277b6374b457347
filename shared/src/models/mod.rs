//! Domain models for the household inventory tracker

mod category;
mod consumable;
mod dashboard;
mod inventory;
mod purchase;
mod usage;

pub use category::*;
pub use consumable::*;
pub use dashboard::*;
pub use inventory::*;
pub use purchase::*;
pub use usage::*;
