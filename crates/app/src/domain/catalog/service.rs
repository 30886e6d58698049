//! Catalog service.

use async_trait::async_trait;
use grailify::{
    fixtures::CatalogSeed, inventory::SizeSelection, prices::Price, pricing::PriceKind,
};
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        catalog::{
            data::{NewCategory, NewItem, NewSize, SeedReport},
            errors::CatalogServiceError,
            records::{CategoryId, CategoryRecord, ItemId, ItemRecord, SizeRecord},
            repository::PgCatalogRepository,
        },
        inventory::PgInventoryRepository,
        prices::PgPriceEventsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    catalog: PgCatalogRepository,
    prices: PgPriceEventsRepository,
    inventory: PgInventoryRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            catalog: PgCatalogRepository::new(),
            prices: PgPriceEventsRepository::new(),
            inventory: PgInventoryRepository::new(),
        }
    }

    /// Insert the item and open its price history with the retail price.
    async fn insert_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &NewItem,
    ) -> Result<ItemRecord, CatalogServiceError> {
        let record = self.catalog.create_item(tx, item).await?;

        self.prices
            .append_event(tx, record.id, record.price, PriceKind::Retail)
            .await?;

        Ok(record)
    }

    async fn record_seed_sale(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
        price: Price,
    ) -> Result<(), CatalogServiceError> {
        self.prices
            .append_event(tx, item, price, PriceKind::Sale)
            .await?;

        if self.catalog.increment_units_sold(tx, item).await? == 0 {
            return Err(CatalogServiceError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    #[tracing::instrument(
        name = "catalog.service.create_category",
        skip(self, category),
        fields(slug = %category.slug),
        err
    )]
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.catalog.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.catalog.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    #[tracing::instrument(name = "catalog.service.create_size", skip(self), err)]
    async fn create_size(&self, size: NewSize) -> Result<SizeRecord, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.catalog.create_size(&mut tx, &size).await?;

        tx.commit().await?;

        Ok(record)
    }

    #[tracing::instrument(
        name = "catalog.service.create_item",
        skip(self, item),
        fields(name = %item.name, brand = %item.brand),
        err
    )]
    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.insert_item(&mut tx, &item).await?;

        tx.commit().await?;

        info!(item_id = %record.id, "created item");

        Ok(record)
    }

    async fn get_item(&self, item: ItemId) -> Result<ItemRecord, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.catalog.get_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(record)
    }

    #[tracing::instrument(
        name = "catalog.service.seed_catalog",
        skip(self, seed),
        fields(
            categories = seed.categories.len(),
            items = seed.items.len()
        ),
        err
    )]
    async fn seed_catalog(&self, seed: CatalogSeed) -> Result<SeedReport, CatalogServiceError> {
        let mut tx = self.db.begin_transaction().await?;
        let mut report = SeedReport::default();
        let mut categories: FxHashMap<String, CategoryId> = FxHashMap::default();

        for category in seed.categories {
            let record = self
                .catalog
                .create_category(
                    &mut tx,
                    &NewCategory {
                        name: category.name,
                        slug: category.slug,
                    },
                )
                .await?;

            for value in category.sizes {
                self.catalog
                    .create_size(
                        &mut tx,
                        &NewSize {
                            category: record.id,
                            value,
                        },
                    )
                    .await?;

                report.sizes += 1;
            }

            categories.insert(record.slug.to_lowercase(), record.id);
            report.categories += 1;
        }

        for item in seed.items {
            let category = item
                .category
                .map(|slug| {
                    categories
                        .get(&slug.to_lowercase())
                        .copied()
                        .ok_or(CatalogServiceError::UnknownCategory(slug))
                })
                .transpose()?;

            let record = self
                .insert_item(
                    &mut tx,
                    &NewItem {
                        name: item.name,
                        description: item.description,
                        brand: item.brand,
                        category,
                        price: item.price,
                        release_date: item.release_date,
                        image_url: item.image_url,
                    },
                )
                .await?;

            report.items += 1;

            for price in item.sales {
                self.record_seed_sale(&mut tx, record.id, price).await?;

                report.sales += 1;
            }

            for listing in item.listings {
                let size = listing.size.unwrap_or_default();

                let size_id = match SizeSelection::parse(&size) {
                    SizeSelection::OneSize => None,
                    SizeSelection::Named(value) => Some(
                        self.inventory
                            .find_item_size(&mut tx, record.id, value)
                            .await?
                            .ok_or_else(|| CatalogServiceError::InvalidSize {
                                item: record.name.clone(),
                                size: value.to_string(),
                            })?,
                    ),
                };

                self.inventory
                    .create_listing(
                        &mut tx,
                        record.id,
                        None,
                        size_id,
                        listing.price,
                        listing.stock,
                    )
                    .await?;

                report.listings += 1;
            }
        }

        tx.commit().await?;

        info!(
            categories = report.categories,
            items = report.items,
            sales = report.sales,
            listings = report.listings,
            "seeded catalog"
        );

        Ok(report)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Creates a category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError>;

    /// All categories ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CatalogServiceError>;

    /// Adds a size to a category.
    async fn create_size(&self, size: NewSize) -> Result<SizeRecord, CatalogServiceError>;

    /// Creates an item; its price history starts with a retail event.
    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, CatalogServiceError>;

    /// Retrieve a single item.
    async fn get_item(&self, item: ItemId) -> Result<ItemRecord, CatalogServiceError>;

    /// Load a validated fixture in a single transaction. Sales count towards
    /// `units_sold`; listings are owned by the platform.
    async fn seed_catalog(&self, seed: CatalogSeed) -> Result<SeedReport, CatalogServiceError>;
}
