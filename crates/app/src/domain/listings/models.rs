//! Listing Models

use grailify::{inventory::DEFAULT_PLATFORM_SELLER, prices::Price, pricing::PriceEvent};
use jiff::Timestamp;
use rusty_money::iso::{self, Currency};
use serde::Serialize;

use crate::domain::{
    catalog::records::{CategoryId, CategoryRecord, ItemId, ItemRecord, SizeRecord},
    inventory::models::InventoryView,
};

/// Item as shown in catalog lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category_id: Option<CategoryId>,
    pub image_url: String,
    pub release_date: Option<Timestamp>,
    pub units_sold: u64,

    /// Resolved display price rounded up to a multiple of ten.
    pub display_price: Price,
}

impl CatalogItem {
    pub(crate) fn new(item: ItemRecord, display_price: Price) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            brand: item.brand,
            category_id: item.category_id,
            image_url: item.image_url,
            release_date: item.release_date,
            units_sold: item.units_sold,
            display_price,
        }
    }
}

/// Everything the item page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    pub item: ItemRecord,

    /// Rounded display price.
    pub display_price: Price,

    /// Display price before rounding.
    pub resolved_price: Price,

    /// Unrounded retail price.
    pub retail_price: Price,
    pub inventory: Vec<InventoryView>,

    /// Oldest first.
    pub price_history: Vec<PriceEvent>,

    /// Sizes a seller may list this item in.
    pub valid_sizes: Vec<SizeRecord>,
}

/// Best sellers in the two configured category groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendingItems {
    pub primary: Vec<CatalogItem>,
    pub secondary: Vec<CatalogItem>,
}

/// A category and its items, best sellers first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellPageCategory {
    pub category: CategoryRecord,
    pub items: Vec<ItemRecord>,
}

/// Category slugs feeding each trending group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingConfig {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            primary: vec!["sneakers".to_string()],
            secondary: vec!["apparel".to_string(), "accessories".to_string()],
        }
    }
}

/// Listing service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsConfig {
    /// Seller label for platform-owned listings.
    pub platform_seller: String,
    pub trending: TrendingConfig,

    /// Currency of stored prices; scales display rounding and price filters.
    pub currency: &'static Currency,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            platform_seller: DEFAULT_PLATFORM_SELLER.to_string(),
            trending: TrendingConfig::default(),
            currency: iso::USD,
        }
    }
}
