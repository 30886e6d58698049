//! Order Items Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    catalog::records::ItemId,
    columns::{bind_price, bind_quantity, try_get_price, try_get_quantity},
    inventory::records::ListingId,
    orders::{
        data::CartLine,
        records::{OrderId, OrderItemId, OrderItemRecord},
    },
};

const CREATE_ORDER_ITEM_SQL: &str = include_str!("../sql/create_order_item.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");

/// Every order line is a single unit.
const LINE_QUANTITY: u32 = 1;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
        line: &CartLine,
    ) -> Result<OrderItemRecord, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(CREATE_ORDER_ITEM_SQL)
            .bind(order.into_i64())
            .bind(line.item.into_i64())
            .bind(line.listing.map(ListingId::into_i64))
            .bind(bind_quantity("quantity", LINE_QUANTITY)?)
            .bind(bind_price("price_at_purchase", line.price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderItemId::from_i64(row.try_get("id")?),
            order_id: OrderId::from_i64(row.try_get("order_id")?),
            item_id: ItemId::from_i64(row.try_get("item_id")?),
            listing_id: row
                .try_get::<Option<i64>, _>("inventory_listing_id")?
                .map(ListingId::from_i64),
            quantity: try_get_quantity(row, "quantity")?,
            price_at_purchase: try_get_price(row, "price_at_purchase")?,
        })
    }
}
