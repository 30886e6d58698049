//! Catalog Data

use grailify::prices::Price;
use jiff::Timestamp;

use crate::domain::catalog::records::CategoryId;

/// New Category Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

/// New Size Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSize {
    pub category: CategoryId,
    pub value: String,
}

/// New Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: Option<CategoryId>,
    pub price: Price,
    pub release_date: Option<Timestamp>,
    pub image_url: String,
}

/// Rows written by a catalog seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub sizes: usize,
    pub items: usize,
    pub sales: usize,
    pub listings: usize,
}
