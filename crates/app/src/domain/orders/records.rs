//! Order Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use grailify::prices::Price;
use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{catalog::records::ItemId, inventory::records::ListingId, users::records::UserId},
    ids::TypedId,
};

/// Order ID
pub type OrderId = TypedId<OrderRecord>;

/// Order lifecycle state. Checkout only ever produces `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Completed,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Order Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub user_id: UserId,
    pub total: Price,
    pub status: OrderStatus,
    pub shipping_address_id: Option<i64>,
    pub payment_method_id: Option<i64>,
    pub created_at: Timestamp,
    pub items: Vec<OrderItemRecord>,
}

/// Order Item ID
pub type OrderItemId = TypedId<OrderItemRecord>;

/// Order Item Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemRecord {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub item_id: ItemId,

    /// Cleared when the listing is later deleted.
    pub listing_id: Option<ListingId>,
    pub quantity: u32,
    pub price_at_purchase: Price,
}

/// Row of a user's order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub total: Price,
    pub status: OrderStatus,
    pub item_count: u64,
    pub created_at: Timestamp,
}
