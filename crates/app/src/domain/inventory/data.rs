//! Inventory Data

use grailify::prices::Price;

use crate::domain::{catalog::records::ItemId, users::records::UserId};

/// New Listing Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    /// `None` lists the item as the platform.
    pub seller: Option<UserId>,
    pub item: ItemId,

    /// Size value of the item's category; blank or "One Size" for no size.
    pub size: String,
    pub price: Price,
    pub stock: u32,
}

/// Listing Update Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingUpdate {
    pub price: Price,
    pub stock: u32,
}
