//! Prices

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::TryFromIntError,
    ops::Deref,
};

use rusty_money::iso::Currency;
use serde::{Deserialize, Serialize};

/// Granularity, in whole currency units, that buyer-facing list prices are
/// rounded up to.
pub const DISPLAY_PRICE_STEP: u64 = 10;

/// Minor units in one whole unit of `currency` (100 for USD, 1 for JPY).
pub fn minor_units_per_major(currency: &Currency) -> u64 {
    10_u64.saturating_pow(currency.exponent)
}

/// Represents a price in pence/cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Amount in minor currency units.
    pub const fn minor_units(self) -> u64 {
        self.value
    }

    /// Round up to the nearest multiple of [`DISPLAY_PRICE_STEP`] whole units
    /// of `currency`, so 145.00 USD becomes 150.00 USD.
    ///
    /// Prices already on a step boundary are returned unchanged.
    pub fn ceil_to_ten(self, currency: &Currency) -> Self {
        let step = DISPLAY_PRICE_STEP.saturating_mul(minor_units_per_major(currency));

        Price {
            value: self.value.div_ceil(step).saturating_mul(step),
        }
    }

    /// Convert to the signed representation used by the store.
    ///
    /// # Errors
    ///
    /// Returns an error when the amount does not fit in an `i64`.
    pub fn to_i64(self) -> Result<i64, TryFromIntError> {
        i64::try_from(self.value)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

impl TryFrom<i64> for Price {
    type Error = TryFromIntError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value).map(Price::new)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{:02}", self.value / 100, self.value % 100)
    }
}
