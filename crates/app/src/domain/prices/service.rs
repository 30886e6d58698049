//! Price ledger service.

use async_trait::async_trait;
use grailify::{
    prices::Price,
    pricing::{DisplayPrice, PriceEvent, PriceKind},
};
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        catalog::records::ItemId,
        prices::{errors::PriceLedgerError, repository::PgPriceEventsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgPriceLedger {
    db: Db,
    repository: PgPriceEventsRepository,
}

impl PgPriceLedger {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPriceEventsRepository::new(),
        }
    }

    async fn append(
        &self,
        item: ItemId,
        price: Price,
        kind: PriceKind,
    ) -> Result<PriceEvent, PriceLedgerError> {
        let mut tx = self.db.begin_transaction().await?;

        let event = self
            .repository
            .append_event(&mut tx, item, price, kind)
            .await?;

        tx.commit().await?;

        info!(
            item_id = %item,
            event_id = event.id,
            kind = kind.as_str(),
            price = %price,
            "recorded price event"
        );

        Ok(event)
    }
}

#[async_trait]
impl PriceLedger for PgPriceLedger {
    #[tracing::instrument(name = "prices.service.resolve_display_price", skip(self), err)]
    async fn resolve_display_price(&self, item: ItemId) -> Result<DisplayPrice, PriceLedgerError> {
        let mut tx = self.db.begin_transaction().await?;

        let price = self
            .repository
            .resolve_display_price(&mut tx, item)
            .await?
            .ok_or(PriceLedgerError::NotFound)?;

        tx.commit().await?;

        Ok(price)
    }

    #[tracing::instrument(name = "prices.service.record_sale", skip(self), err)]
    async fn record_sale(&self, item: ItemId, price: Price) -> Result<PriceEvent, PriceLedgerError> {
        self.append(item, price, PriceKind::Sale).await
    }

    #[tracing::instrument(name = "prices.service.record_retail", skip(self), err)]
    async fn record_retail(
        &self,
        item: ItemId,
        price: Price,
    ) -> Result<PriceEvent, PriceLedgerError> {
        self.append(item, price, PriceKind::Retail).await
    }

    #[tracing::instrument(name = "prices.service.price_history", skip(self), err)]
    async fn price_history(&self, item: ItemId) -> Result<Vec<PriceEvent>, PriceLedgerError> {
        let mut tx = self.db.begin_transaction().await?;

        if self
            .repository
            .resolve_display_price(&mut tx, item)
            .await?
            .is_none()
        {
            return Err(PriceLedgerError::NotFound);
        }

        let events = self.repository.list_events(&mut tx, item).await?;

        tx.commit().await?;

        Ok(events)
    }
}

#[automock]
#[async_trait]
pub trait PriceLedger: Send + Sync {
    /// Latest sale price, falling back to the retail price. Unrounded.
    async fn resolve_display_price(&self, item: ItemId) -> Result<DisplayPrice, PriceLedgerError>;

    /// Append a sale event stamped with the current time.
    async fn record_sale(&self, item: ItemId, price: Price) -> Result<PriceEvent, PriceLedgerError>;

    /// Append a retail event. Retail events never change the display price.
    async fn record_retail(&self, item: ItemId, price: Price)
    -> Result<PriceEvent, PriceLedgerError>;

    /// Full history, oldest first.
    async fn price_history(&self, item: ItemId) -> Result<Vec<PriceEvent>, PriceLedgerError>;
}
