//! Shared types and models for the household inventory tracker
//!
//! This crate contains types shared between the backend, the browser client
//! (via WASM), and the restock projection used by both.

pub mod models;
pub mod projection;
pub mod types;
pub mod validation;

pub use models::*;
pub use projection::*;
pub use types::*;
pub use validation::*;
