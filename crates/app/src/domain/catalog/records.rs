//! Catalog Records

use grailify::prices::Price;
use jiff::Timestamp;
use serde::Serialize;

use crate::ids::TypedId;

/// Category ID
pub type CategoryId = TypedId<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Size ID
pub type SizeId = TypedId<SizeRecord>;

/// Size Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeRecord {
    pub id: SizeId,
    pub category_id: CategoryId,
    pub value: String,
}

/// Item ID
pub type ItemId = TypedId<ItemRecord>;

/// Item Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category_id: Option<CategoryId>,

    /// Retail price.
    pub price: Price,

    /// Advisory popularity counter; only ever incremented.
    pub units_sold: u64,
    pub release_date: Option<Timestamp>,
    pub image_url: String,
    pub created_at: Timestamp,
}

/// Item matched by a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub id: ItemId,
    pub name: String,
    pub brand: String,
    pub image_url: String,
}
