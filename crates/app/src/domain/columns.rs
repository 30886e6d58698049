//! Column decoding helpers shared by repositories.

use grailify::prices::Price;
use sqlx::{Row, postgres::PgRow};

fn column_decode(column: &str, source: std::num::TryFromIntError) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

/// Decode a non-negative `BIGINT` money column.
pub(crate) fn try_get_price(row: &PgRow, column: &str) -> sqlx::Result<Price> {
    let value: i64 = row.try_get(column)?;

    Price::try_from(value).map_err(|error| column_decode(column, error))
}

/// Decode a non-negative `BIGINT` counter column.
pub(crate) fn try_get_count(row: &PgRow, column: &str) -> sqlx::Result<u64> {
    let value: i64 = row.try_get(column)?;

    u64::try_from(value).map_err(|error| column_decode(column, error))
}

/// Decode a non-negative `INTEGER` column.
pub(crate) fn try_get_quantity(row: &PgRow, column: &str) -> sqlx::Result<u32> {
    let value: i32 = row.try_get(column)?;

    u32::try_from(value).map_err(|error| column_decode(column, error))
}

/// Encode a price for binding, reporting overflow against `column`.
pub(crate) fn bind_price(column: &str, price: Price) -> sqlx::Result<i64> {
    price.to_i64().map_err(|error| column_decode(column, error))
}

/// Encode a quantity for binding, reporting overflow against `column`.
pub(crate) fn bind_quantity(column: &str, quantity: u32) -> sqlx::Result<i32> {
    i32::try_from(quantity).map_err(|error| column_decode(column, error))
}
