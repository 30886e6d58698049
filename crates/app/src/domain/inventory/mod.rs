//! Inventory
//!
//! Per-item listings from sellers and the platform.

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgInventoryRepository;

pub use errors::InventoryServiceError;
pub use service::*;
