//! Price Events Repository

use grailify::{
    prices::Price,
    pricing::{DisplayPrice, PriceEvent, PriceKind},
};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Row, Transaction, postgres::PgRow, query};

use crate::{
    domain::{
        catalog::records::ItemId,
        columns::{bind_price, try_get_price},
    },
    ids::to_i64s,
};

const APPEND_PRICE_EVENT_SQL: &str = include_str!("sql/append_price_event.sql");
const LIST_PRICE_EVENTS_SQL: &str = include_str!("sql/list_price_events.sql");
const RESOLVE_DISPLAY_PRICES_SQL: &str = include_str!("sql/resolve_display_prices.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPriceEventsRepository;

impl PgPriceEventsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn append_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
        price: Price,
        kind: PriceKind,
    ) -> Result<PriceEvent, sqlx::Error> {
        query(APPEND_PRICE_EVENT_SQL)
            .bind(item.into_i64())
            .bind(bind_price("price", price)?)
            .bind(kind.as_str())
            .try_map(|row: PgRow| price_event_from_row(&row))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_events(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<Vec<PriceEvent>, sqlx::Error> {
        query(LIST_PRICE_EVENTS_SQL)
            .bind(item.into_i64())
            .try_map(|row: PgRow| price_event_from_row(&row))
            .fetch_all(&mut **tx)
            .await
    }

    /// Display prices for the given items. Unknown ids are absent from the map.
    pub(crate) async fn resolve_display_prices(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        items: &[ItemId],
    ) -> Result<FxHashMap<ItemId, DisplayPrice>, sqlx::Error> {
        if items.is_empty() {
            return Ok(FxHashMap::default());
        }

        let rows = query(RESOLVE_DISPLAY_PRICES_SQL)
            .bind(to_i64s(items))
            .try_map(|row: PgRow| {
                let item = ItemId::from_i64(row.try_get("item_id")?);
                let price = DisplayPrice {
                    resolved: try_get_price(&row, "resolved_price")?,
                    retail: try_get_price(&row, "retail_price")?,
                };

                Ok((item, price))
            })
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows.into_iter().collect())
    }

    pub(crate) async fn resolve_display_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<Option<DisplayPrice>, sqlx::Error> {
        let mut prices = self.resolve_display_prices(tx, &[item]).await?;

        Ok(prices.remove(&item))
    }
}

fn price_event_from_row(row: &PgRow) -> sqlx::Result<PriceEvent> {
    let kind: String = row.try_get("kind")?;

    let kind = kind.parse::<PriceKind>().map_err(|e| sqlx::Error::ColumnDecode {
        index: "kind".to_string(),
        source: Box::new(e),
    })?;

    Ok(PriceEvent {
        id: row.try_get("id")?,
        price: try_get_price(row, "price")?,
        kind,
        recorded_at: row.try_get::<SqlxTimestamp, _>("recorded_at")?.to_jiff(),
    })
}
