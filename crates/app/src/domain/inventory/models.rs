//! Inventory Models

use grailify::prices::Price;
use jiff::Timestamp;
use serde::Serialize;

use crate::domain::{catalog::records::ItemId, inventory::records::ListingId};

/// Buyer-facing listing of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub listing_id: ListingId,

    /// Size value, or "One Size".
    pub size: String,
    pub price: Price,
    pub stock: u32,

    /// Seller username, or the platform seller name.
    pub seller: String,
}

/// A seller's own listing, including sold-out ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerListingView {
    pub listing_id: ListingId,
    pub item_id: ItemId,
    pub item_name: String,
    pub item_image_url: String,
    pub size: String,
    pub price: Price,
    pub stock: u32,
    pub created_at: Timestamp,
}
