//! Catalog
//!
//! Categories, sizes and items, plus the store side of catalog queries.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgCatalogRepository;

pub use errors::CatalogServiceError;
pub use service::*;
