//! Order Data

use grailify::prices::Price;
use rusty_money::iso::{self, Currency};

use crate::domain::{catalog::records::ItemId, inventory::records::ListingId};

/// One cart line. Quantity is always one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub item: ItemId,
    pub listing: Option<ListingId>,

    /// Unit price at selection time; frozen into the order.
    pub price: Price,
}

/// A cart submitted for checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub lines: Vec<CartLine>,

    /// Total declared by the client.
    pub total: Price,

    /// Reference into the external address book.
    pub shipping_address_id: Option<i64>,

    /// Reference to an external, pre-authorised payment method.
    pub payment_method_id: Option<i64>,
}

/// How a declared order total is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TotalPolicy {
    /// Persist the declared total as given.
    #[default]
    Trusted,

    /// Reject totals that differ from the sum of the line prices.
    Verified,
}

/// Checkout settings.
#[derive(Debug, Clone, Copy)]
pub struct OrdersConfig {
    pub total_policy: TotalPolicy,
    pub currency: &'static Currency,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            total_policy: TotalPolicy::Trusted,
            currency: iso::USD,
        }
    }
}
