//! Orders
//!
//! Checkout of a client-held cart into a persisted order, and order history.

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use data::{OrdersConfig, TotalPolicy};
pub use errors::OrdersServiceError;
pub use service::*;
