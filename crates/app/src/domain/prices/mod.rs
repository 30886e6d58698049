//! Price Ledger
//!
//! Append-only price history per item, and display price resolution over it.

pub mod errors;
mod repository;
pub mod service;

pub(crate) use repository::PgPriceEventsRepository;

pub use errors::PriceLedgerError;
pub use service::*;
