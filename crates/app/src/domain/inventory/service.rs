//! Inventory service.

use async_trait::async_trait;
use grailify::inventory::SizeSelection;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        catalog::records::{ItemId, SizeId},
        inventory::{
            data::{ListingUpdate, NewListing},
            errors::InventoryServiceError,
            models::{InventoryView, SellerListingView},
            records::{ListingId, ListingRecord},
            repository::PgInventoryRepository,
        },
        users::records::UserId,
    },
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    repository: PgInventoryRepository,
    platform_seller: String,
}

impl PgInventoryService {
    /// `platform_seller` labels listings that have no seller.
    #[must_use]
    pub fn new(db: Db, platform_seller: impl Into<String>) -> Self {
        Self {
            db,
            repository: PgInventoryRepository::new(),
            platform_seller: platform_seller.into(),
        }
    }
}

/// Resolve a seller-supplied size against the item's category.
pub(crate) async fn resolve_listing_size(
    repository: &PgInventoryRepository,
    tx: &mut Transaction<'_, Postgres>,
    item: ItemId,
    size: &str,
) -> Result<Option<SizeId>, InventoryServiceError> {
    if !repository.item_exists(tx, item).await? {
        return Err(InventoryServiceError::NotFound);
    }

    match SizeSelection::parse(size) {
        SizeSelection::OneSize => Ok(None),
        SizeSelection::Named(value) => repository
            .find_item_size(tx, item, value)
            .await?
            .map(Some)
            .ok_or_else(|| InventoryServiceError::InvalidSize(value.to_string())),
    }
}

#[async_trait]
impl InventoryService for PgInventoryService {
    #[tracing::instrument(name = "inventory.service.list_inventory", skip(self), err)]
    async fn list_inventory(&self, item: ItemId) -> Result<Vec<InventoryView>, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if !self.repository.item_exists(&mut tx, item).await? {
            return Err(InventoryServiceError::NotFound);
        }

        let inventory = self
            .repository
            .list_inventory(&mut tx, item, &self.platform_seller)
            .await?;

        tx.commit().await?;

        Ok(inventory)
    }

    #[tracing::instrument(
        name = "inventory.service.create_listing",
        skip(self, listing),
        fields(
            item_id = %listing.item,
            seller_id = tracing::field::Empty,
            listing_id = tracing::field::Empty
        ),
        err
    )]
    async fn create_listing(
        &self,
        listing: NewListing,
    ) -> Result<ListingRecord, InventoryServiceError> {
        let span = Span::current();

        if let Some(seller) = listing.seller {
            span.record("seller_id", tracing::field::display(seller));
        }

        let mut tx = self.db.begin_transaction().await?;

        let size =
            resolve_listing_size(&self.repository, &mut tx, listing.item, &listing.size).await?;

        let record = self
            .repository
            .create_listing(
                &mut tx,
                listing.item,
                listing.seller,
                size,
                listing.price,
                listing.stock,
            )
            .await?;

        tx.commit().await?;

        span.record("listing_id", tracing::field::display(record.id));

        info!(listing_id = %record.id, "created listing");

        Ok(record)
    }

    #[tracing::instrument(name = "inventory.service.update_listing", skip(self), err)]
    async fn update_listing(
        &self,
        seller: UserId,
        listing: ListingId,
        update: ListingUpdate,
    ) -> Result<ListingRecord, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .repository
            .update_listing(&mut tx, seller, listing, update.price, update.stock)
            .await?
            .ok_or(InventoryServiceError::NotFoundOrForbidden)?;

        tx.commit().await?;

        info!(listing_id = %record.id, "updated listing");

        Ok(record)
    }

    #[tracing::instrument(name = "inventory.service.delete_listing", skip(self), err)]
    async fn delete_listing(
        &self,
        seller: UserId,
        listing: ListingId,
    ) -> Result<(), InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .delete_listing(&mut tx, seller, listing)
            .await?;

        if rows_affected == 0 {
            return Err(InventoryServiceError::NotFoundOrForbidden);
        }

        tx.commit().await?;

        info!(listing_id = %listing, "deleted listing");

        Ok(())
    }

    async fn list_seller_listings(
        &self,
        seller: UserId,
    ) -> Result<Vec<SellerListingView>, InventoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let listings = self.repository.list_seller_listings(&mut tx, seller).await?;

        tx.commit().await?;

        Ok(listings)
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// In-stock listings for an item, cheapest first.
    async fn list_inventory(&self, item: ItemId) -> Result<Vec<InventoryView>, InventoryServiceError>;

    /// List an item for sale.
    async fn create_listing(&self, listing: NewListing)
    -> Result<ListingRecord, InventoryServiceError>;

    /// Change the price and stock of one of the seller's listings.
    async fn update_listing(
        &self,
        seller: UserId,
        listing: ListingId,
        update: ListingUpdate,
    ) -> Result<ListingRecord, InventoryServiceError>;

    /// Remove one of the seller's listings.
    async fn delete_listing(
        &self,
        seller: UserId,
        listing: ListingId,
    ) -> Result<(), InventoryServiceError>;

    /// All of the seller's listings, newest first, including sold-out ones.
    async fn list_seller_listings(
        &self,
        seller: UserId,
    ) -> Result<Vec<SellerListingView>, InventoryServiceError>;
}
