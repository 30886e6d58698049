//! Pricing
//!
//! Resolution of an item's display price from its price history, and cart
//! totals.

use std::{num::TryFromIntError, str::FromStr};

use jiff::Timestamp;
use rusty_money::{Money, MoneyError, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prices::Price;

/// Kind of entry recorded in an item's price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceKind {
    /// Manufacturer or platform retail price.
    Retail,

    /// Price an item actually traded at.
    Sale,
}

impl PriceKind {
    /// Value stored in the `kind` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            PriceKind::Retail => "retail",
            PriceKind::Sale => "sale",
        }
    }
}

/// Unrecognised price kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown price kind: {0}")]
pub struct UnknownPriceKind(pub String);

impl FromStr for PriceKind {
    type Err = UnknownPriceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retail" => Ok(PriceKind::Retail),
            "sale" => Ok(PriceKind::Sale),
            other => Err(UnknownPriceKind(other.to_string())),
        }
    }
}

/// One immutable entry in an item's price history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceEvent {
    /// Monotonic event id; breaks ties between equal timestamps.
    pub id: i64,

    /// Recorded price.
    pub price: Price,

    /// Retail or sale.
    pub kind: PriceKind,

    /// When the event was recorded.
    pub recorded_at: Timestamp,
}

/// Resolve the display price for an item.
///
/// The latest `sale` event wins, ordered by `recorded_at` and then by event id.
/// Retail events never affect the result. Without any sale the base price is
/// returned unchanged.
pub fn resolve_display_price(base: Price, events: &[PriceEvent]) -> Price {
    events
        .iter()
        .filter(|event| event.kind == PriceKind::Sale)
        .max_by_key(|event| (event.recorded_at, event.id))
        .map_or(base, |event| event.price)
}

/// Display price facets for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayPrice {
    /// Raw price resolved from the ledger.
    pub resolved: Price,

    /// The item's stored retail price.
    pub retail: Price,
}

impl DisplayPrice {
    /// Resolve from a base price and the item's history.
    pub fn resolve(retail: Price, events: &[PriceEvent]) -> Self {
        Self {
            resolved: resolve_display_price(retail, events),
            retail,
        }
    }

    /// Price shown in buyer-facing views.
    pub fn rounded(self, currency: &Currency) -> Price {
        self.resolved.ceil_to_ten(currency)
    }
}

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No prices were provided.
    #[error("no prices provided")]
    NoPrices,

    /// A price does not fit in a signed amount.
    #[error("price out of range")]
    OutOfRange(#[from] TryFromIntError),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total of a sequence of prices in the given currency.
///
/// # Errors
///
/// - [`TotalPriceError::NoPrices`]: the sequence was empty.
/// - [`TotalPriceError::OutOfRange`]: a price does not fit in an `i64`.
/// - [`TotalPriceError::Money`]: wrapped money arithmetic error.
pub fn total_price<I>(
    prices: I,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, TotalPriceError>
where
    I: IntoIterator<Item = Price>,
{
    let mut prices = prices.into_iter().peekable();

    if prices.peek().is_none() {
        return Err(TotalPriceError::NoPrices);
    }

    prices.try_fold(Money::from_minor(0, currency), |acc, price| {
        Ok(acc.add(Money::from_minor(price.to_i64()?, currency))?)
    })
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    fn event(id: i64, price: u64, kind: PriceKind, recorded_at: Timestamp) -> PriceEvent {
        PriceEvent {
            id,
            price: Price::new(price),
            kind,
            recorded_at,
        }
    }

    #[test]
    fn base_price_used_without_sales() {
        let t0 = Timestamp::UNIX_EPOCH;
        let events = [event(1, 120, PriceKind::Retail, t0)];

        assert_eq!(resolve_display_price(Price::new(100), &events), Price::new(100));
        assert_eq!(resolve_display_price(Price::new(100), &[]), Price::new(100));
    }

    #[test]
    fn latest_sale_wins() -> TestResult {
        let t1 = Timestamp::UNIX_EPOCH;
        let t2 = t1.checked_add(SignedDuration::from_secs(60))?;

        let events = [
            event(2, 145_00, PriceKind::Sale, t2),
            event(1, 87_00, PriceKind::Sale, t1),
        ];

        let price = DisplayPrice::resolve(Price::new(133_00), &events);

        assert_eq!(price.resolved, Price::new(145_00));
        assert_eq!(price.rounded(iso::USD), Price::new(150_00));
        assert_eq!(price.retail, Price::new(133_00));

        Ok(())
    }

    #[test]
    fn retail_events_after_sale_are_ignored() -> TestResult {
        let t1 = Timestamp::UNIX_EPOCH;
        let t2 = t1.checked_add(SignedDuration::from_secs(60))?;

        let events = [
            event(1, 90, PriceKind::Sale, t1),
            event(2, 500, PriceKind::Retail, t2),
        ];

        assert_eq!(resolve_display_price(Price::new(100), &events), Price::new(90));

        Ok(())
    }

    #[test]
    fn equal_timestamps_resolve_to_highest_id() {
        let t = Timestamp::UNIX_EPOCH;

        let events = [
            event(7, 300, PriceKind::Sale, t),
            event(9, 310, PriceKind::Sale, t),
            event(8, 320, PriceKind::Sale, t),
        ];

        assert_eq!(resolve_display_price(Price::new(100), &events), Price::new(310));
    }

    #[test]
    fn price_kind_parses_stored_values() -> TestResult {
        assert_eq!("sale".parse::<PriceKind>()?, PriceKind::Sale);
        assert_eq!("retail".parse::<PriceKind>()?, PriceKind::Retail);
        assert!("refund".parse::<PriceKind>().is_err());

        Ok(())
    }

    #[test]
    fn test_total_price() -> TestResult {
        let total = total_price([Price::new(100_00), Price::new(130_00)], iso::USD)?;

        assert_eq!(total, Money::from_minor(230_00, iso::USD));

        Ok(())
    }

    #[test]
    fn test_total_price_empty() {
        assert!(matches!(
            total_price(Vec::<Price>::new(), iso::USD),
            Err(TotalPriceError::NoPrices)
        ));
    }
}
