//! Listings
//!
//! Buyer-facing catalog views: browse, item detail, search, trending and
//! the seller's pick-an-item page. Sales are recorded here so the price
//! ledger and the popularity counter move together.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::ListingsServiceError;
pub use models::{ListingsConfig, TrendingConfig};
pub use service::*;
