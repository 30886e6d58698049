//! Order Repositories

mod items;
mod orders;

pub(crate) use items::PgOrderItemsRepository;
pub(crate) use orders::PgOrdersRepository;

use sqlx::{Row, postgres::PgRow};

use crate::domain::orders::records::OrderStatus;

fn try_get_status(row: &PgRow) -> sqlx::Result<OrderStatus> {
    let status: String = row.try_get("status")?;

    match status.as_str() {
        "Completed" => Ok(OrderStatus::Completed),
        other => Err(sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: format!("unknown order status: {other}").into(),
        }),
    }
}
