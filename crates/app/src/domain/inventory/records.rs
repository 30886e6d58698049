//! Inventory Records

use grailify::prices::Price;
use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{
        catalog::records::{ItemId, SizeId},
        users::records::UserId,
    },
    ids::TypedId,
};

/// Listing ID
pub type ListingId = TypedId<ListingRecord>;

/// Listing Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub id: ListingId,
    pub item_id: ItemId,

    /// `None` for platform-owned listings.
    pub seller_id: Option<UserId>,

    /// `None` for one-size listings.
    pub size_id: Option<SizeId>,
    pub price: Price,
    pub stock: u32,
    pub created_at: Timestamp,
}
