//! Orders Repository

use grailify::prices::Price;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, Row, Transaction, postgres::PgRow, query, query_scalar};

use crate::domain::{
    columns::{bind_price, try_get_count, try_get_price},
    orders::records::{OrderId, OrderRecord, OrderStatus, OrderSummary},
    users::records::UserId,
};

use super::try_get_status;

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
        total: Price,
        shipping_address_id: Option<i64>,
        payment_method_id: Option<i64>,
    ) -> Result<OrderId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_ORDER_SQL)
            .bind(user.into_i64())
            .bind(bind_price("total_amount", total)?)
            .bind(OrderStatus::Completed.as_str())
            .bind(shipping_address_id)
            .bind(payment_method_id)
            .fetch_one(&mut **tx)
            .await?;

        Ok(OrderId::from_i64(id))
    }

    /// The order without its items; other users' orders are not found.
    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
        order: OrderId,
    ) -> Result<OrderRecord, sqlx::Error> {
        query(GET_ORDER_SQL)
            .bind(order.into_i64())
            .bind(user.into_i64())
            .try_map(|row: PgRow| {
                Ok(OrderRecord {
                    id: OrderId::from_i64(row.try_get("id")?),
                    user_id: UserId::from_i64(row.try_get("user_id")?),
                    total: try_get_price(&row, "total_amount")?,
                    status: try_get_status(&row)?,
                    shipping_address_id: row.try_get("shipping_address_id")?,
                    payment_method_id: row.try_get("payment_method_id")?,
                    created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
                    items: Vec::new(),
                })
            })
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserId,
    ) -> Result<Vec<OrderSummary>, sqlx::Error> {
        query(LIST_ORDERS_SQL)
            .bind(user.into_i64())
            .try_map(|row: PgRow| {
                Ok(OrderSummary {
                    id: OrderId::from_i64(row.try_get("id")?),
                    total: try_get_price(&row, "total_amount")?,
                    status: try_get_status(&row)?,
                    item_count: try_get_count(&row, "item_count")?,
                    created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
                })
            })
            .fetch_all(&mut **tx)
            .await
    }
}
