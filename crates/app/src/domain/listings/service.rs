//! Listings service.

use async_trait::async_trait;
use grailify::{
    catalog::{CatalogOrder, CatalogPage, CatalogQuery, SEARCH_LIMIT, TRENDING_LIMIT, search_pattern},
    prices::Price,
    pricing::{PriceEvent, PriceKind},
};
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};
use tracing::{Span, info, warn};

use crate::{
    database::Db,
    domain::{
        catalog::{
            PgCatalogRepository,
            records::{CategoryId, CategoryRecord, ItemId, ItemRecord, SearchResult, SizeRecord},
        },
        inventory::PgInventoryRepository,
        listings::{
            errors::ListingsServiceError,
            models::{CatalogItem, ItemDetail, ListingsConfig, SellPageCategory, TrendingItems},
        },
        prices::PgPriceEventsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgListingsService {
    db: Db,
    catalog: PgCatalogRepository,
    prices: PgPriceEventsRepository,
    inventory: PgInventoryRepository,
    config: ListingsConfig,
}

impl PgListingsService {
    #[must_use]
    pub fn new(db: Db, config: ListingsConfig) -> Self {
        Self {
            db,
            catalog: PgCatalogRepository::new(),
            prices: PgPriceEventsRepository::new(),
            inventory: PgInventoryRepository::new(),
            config,
        }
    }

    /// List views of the given items with rounded display prices, in the order given.
    async fn catalog_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ids: &[ItemId],
    ) -> Result<Vec<CatalogItem>, ListingsServiceError> {
        let mut records: FxHashMap<ItemId, ItemRecord> = self
            .catalog
            .list_items(tx, ids)
            .await?
            .into_iter()
            .map(|record| (record.id, record))
            .collect();

        let prices = self.prices.resolve_display_prices(tx, ids).await?;

        Ok(ids
            .iter()
            .filter_map(|id| {
                let record = records.remove(id)?;
                let price = prices.get(id)?;

                Some(CatalogItem::new(record, price.rounded(self.config.currency)))
            })
            .collect())
    }

    async fn top_sellers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slugs: &[String],
    ) -> Result<Vec<CatalogItem>, ListingsServiceError> {
        let ids = self
            .catalog
            .top_selling_item_ids(tx, slugs, TRENDING_LIMIT)
            .await?;

        self.catalog_items(tx, &ids).await
    }
}

/// The valid-sizes facet degrades to an empty list instead of failing the page.
fn valid_sizes_or_empty(
    item: ItemId,
    sizes: Result<Vec<SizeRecord>, sqlx::Error>,
) -> Vec<SizeRecord> {
    sizes.unwrap_or_else(|error| {
        warn!(item_id = %item, %error, "failed to load valid sizes");

        Vec::new()
    })
}

#[async_trait]
impl ListingsService for PgListingsService {
    #[tracing::instrument(
        name = "listings.service.browse",
        skip(self, query),
        fields(
            page = tracing::field::Empty,
            total = tracing::field::Empty
        ),
        err
    )]
    async fn browse(
        &self,
        query: CatalogQuery,
        order: CatalogOrder,
    ) -> Result<CatalogPage<CatalogItem>, ListingsServiceError> {
        let plan = query.build(self.config.currency);

        let mut tx = self.db.begin_transaction().await?;

        let matching = self.catalog.matching_item_ids(&mut tx, &plan.filter).await?;
        let page = plan.pagination.paginate(matching, order);
        let items = self.catalog_items(&mut tx, &page.items).await?;

        tx.commit().await?;

        let span = Span::current();

        span.record("page", page.page);
        span.record("total", page.total);

        Ok(CatalogPage {
            items,
            total: page.total,
            total_pages: page.total_pages,
            page: page.page,
        })
    }

    #[tracing::instrument(name = "listings.service.item_detail", skip(self), err)]
    async fn item_detail(&self, item: ItemId) -> Result<ItemDetail, ListingsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.catalog.get_item(&mut tx, item).await?;

        let price = self
            .prices
            .resolve_display_price(&mut tx, item)
            .await?
            .ok_or(ListingsServiceError::NotFound)?;

        let inventory = self
            .inventory
            .list_inventory(&mut tx, item, &self.config.platform_seller)
            .await?;

        let price_history = self.prices.list_events(&mut tx, item).await?;

        tx.commit().await?;

        // Read outside the transaction so a failure here cannot abort it.
        let valid_sizes =
            valid_sizes_or_empty(item, self.catalog.list_item_sizes(self.db.pool(), item).await);

        Ok(ItemDetail {
            item: record,
            display_price: price.rounded(self.config.currency),
            resolved_price: price.resolved,
            retail_price: price.retail,
            inventory,
            price_history,
            valid_sizes,
        })
    }

    #[tracing::instrument(name = "listings.service.search", skip(self), err)]
    async fn search(&self, term: String) -> Result<Vec<SearchResult>, ListingsServiceError> {
        let Some(pattern) = search_pattern(&term) else {
            return Ok(Vec::new());
        };

        let mut tx = self.db.begin_transaction().await?;

        let results = self
            .catalog
            .search_items(&mut tx, &pattern, SEARCH_LIMIT)
            .await?;

        tx.commit().await?;

        Ok(results)
    }

    #[tracing::instrument(name = "listings.service.trending", skip(self), err)]
    async fn trending(&self) -> Result<TrendingItems, ListingsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let primary = self
            .top_sellers(&mut tx, &self.config.trending.primary)
            .await?;

        let secondary = self
            .top_sellers(&mut tx, &self.config.trending.secondary)
            .await?;

        tx.commit().await?;

        Ok(TrendingItems { primary, secondary })
    }

    #[tracing::instrument(
        name = "listings.service.record_sale",
        skip(self),
        fields(sale_price = tracing::field::Empty),
        err
    )]
    async fn record_sale(
        &self,
        item: ItemId,
        price: Option<Price>,
    ) -> Result<PriceEvent, ListingsServiceError> {
        if item.into_i64() <= 0 {
            return Err(ListingsServiceError::InvalidItemId(item.into_i64()));
        }

        let mut tx = self.db.begin_transaction().await?;

        let price = match price {
            Some(price) => price,
            None => {
                self.prices
                    .resolve_display_price(&mut tx, item)
                    .await?
                    .ok_or(ListingsServiceError::NotFound)?
                    .resolved
            }
        };

        Span::current().record("sale_price", tracing::field::display(price));

        let event = self
            .prices
            .append_event(&mut tx, item, price, PriceKind::Sale)
            .await?;

        if self.catalog.increment_units_sold(&mut tx, item).await? == 0 {
            return Err(ListingsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(item_id = %item, event_id = event.id, price = %price, "recorded sale");

        Ok(event)
    }

    async fn categories(&self) -> Result<Vec<CategoryRecord>, ListingsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.catalog.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    #[tracing::instrument(name = "listings.service.sell_page", skip(self), err)]
    async fn sell_page(&self) -> Result<Vec<SellPageCategory>, ListingsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.catalog.list_categories(&mut tx).await?;
        let items = self.catalog.list_categorised_items(&mut tx).await?;

        tx.commit().await?;

        let mut by_category: FxHashMap<CategoryId, Vec<ItemRecord>> = FxHashMap::default();

        for item in items {
            if let Some(category) = item.category_id {
                by_category.entry(category).or_default().push(item);
            }
        }

        Ok(categories
            .into_iter()
            .map(|category| SellPageCategory {
                items: by_category.remove(&category.id).unwrap_or_default(),
                category,
            })
            .collect())
    }
}

#[automock]
#[async_trait]
pub trait ListingsService: Send + Sync {
    /// One page of the catalog. Items have no stable order across requests
    /// unless `order` carries a seed.
    async fn browse(
        &self,
        query: CatalogQuery,
        order: CatalogOrder,
    ) -> Result<CatalogPage<CatalogItem>, ListingsServiceError>;

    /// Item page with prices, inventory, history and valid sizes.
    async fn item_detail(&self, item: ItemId) -> Result<ItemDetail, ListingsServiceError>;

    /// Up to ten items whose name or brand contains the term.
    async fn search(&self, term: String) -> Result<Vec<SearchResult>, ListingsServiceError>;

    /// Best sellers of the configured category groups.
    async fn trending(&self) -> Result<TrendingItems, ListingsServiceError>;

    /// Record a trade; defaults to the current display price.
    async fn record_sale(
        &self,
        item: ItemId,
        price: Option<Price>,
    ) -> Result<PriceEvent, ListingsServiceError>;

    /// All categories ordered by name.
    async fn categories(&self) -> Result<Vec<CategoryRecord>, ListingsServiceError>;

    /// Every category with its items, best sellers first.
    async fn sell_page(&self) -> Result<Vec<SellPageCategory>, ListingsServiceError>;
}

#[cfg(test)]
mod tests {
    use grailify::catalog::PAGE_SIZE;
    use testresult::TestResult;

    use crate::{
        domain::{
            catalog::{CatalogService, records::SizeId},
            inventory::{InventoryService, data::NewListing},
            prices::PriceLedger,
        },
        errors::ErrorKind,
        test::TestContext,
    };

    use super::*;

    fn query(category: Option<&str>, brands: &[&str]) -> CatalogQuery {
        CatalogQuery {
            category: category.map(str::to_string),
            brands: brands.iter().map(|brand| (*brand).to_string()).collect(),
            ..CatalogQuery::default()
        }
    }

    #[tokio::test]
    async fn browse_shows_retail_price_without_sales() -> TestResult {
        let ctx = TestContext::new().await;
        ctx.create_item("Plain Tee", "Basics", None, 100_00).await?;

        let page = ctx
            .listings
            .browse(CatalogQuery::default(), CatalogOrder::Random)
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].display_price, Price::new(100_00));

        Ok(())
    }

    #[tokio::test]
    async fn browse_rounds_latest_sale_price() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_item("Air Max 1", "Nike", None, 133_00).await?;

        ctx.prices.record_sale(item.id, Price::new(87_00)).await?;
        ctx.prices.record_sale(item.id, Price::new(145_00)).await?;

        let page = ctx
            .listings
            .browse(CatalogQuery::default(), CatalogOrder::Random)
            .await?;

        assert_eq!(page.items[0].display_price, Price::new(150_00));

        Ok(())
    }

    #[tokio::test]
    async fn browse_filters_by_category_and_brand() -> TestResult {
        let ctx = TestContext::new().await;
        let sneakers = ctx.create_category("Sneakers", "sneakers", &[]).await?;
        let apparel = ctx.create_category("Apparel", "apparel", &[]).await?;

        ctx.create_item("Air Max 1", "Nike", Some(sneakers.id), 133_00).await?;
        ctx.create_item("Samba", "Adidas", Some(sneakers.id), 100_00).await?;
        ctx.create_item("Hoodie", "Nike", Some(apparel.id), 80_00).await?;

        let names = |page: CatalogPage<CatalogItem>| {
            let mut names: Vec<_> = page.items.into_iter().map(|item| item.name).collect();
            names.sort();
            names
        };

        let sneakers_page = ctx
            .listings
            .browse(query(Some("SNEAKERS"), &[]), CatalogOrder::Random)
            .await?;

        assert_eq!(names(sneakers_page), vec!["Air Max 1", "Samba"]);

        let nike_page = ctx
            .listings
            .browse(query(Some("allgrails"), &["nike"]), CatalogOrder::Random)
            .await?;

        assert_eq!(names(nike_page), vec!["Air Max 1", "Hoodie"]);

        let unknown = ctx
            .listings
            .browse(query(Some("vinyl"), &[]), CatalogOrder::Random)
            .await?;

        assert_eq!(unknown.total, 0);
        assert_eq!(unknown.total_pages, 0);

        Ok(())
    }

    #[tokio::test]
    async fn browse_price_bounds_use_unrounded_price() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_item("Cheap", "Basics", None, 99_95).await?;
        ctx.create_item("Mid", "Basics", None, 200_00).await?;
        ctx.create_item("Dear", "Basics", None, 499_99).await?;

        // 99.95 displays as 100.00 but the bound applies to the raw price.
        let bounded = ctx
            .listings
            .browse(
                CatalogQuery {
                    min_price: Some(99_96),
                    max_price: Some(400_00),
                    ..CatalogQuery::default()
                },
                CatalogOrder::Random,
            )
            .await?;

        assert_eq!(bounded.total, 1);
        assert_eq!(bounded.items[0].name, "Mid");

        // Bounds outside (0, 5000.00) are ignored.
        let ignored = ctx
            .listings
            .browse(
                CatalogQuery {
                    min_price: Some(0),
                    max_price: Some(5_000_00),
                    ..CatalogQuery::default()
                },
                CatalogOrder::Random,
            )
            .await?;

        assert_eq!(ignored.total, 3);

        Ok(())
    }

    #[tokio::test]
    async fn browse_max_price_excludes_dearer_items() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_item("Jordan 1 Chicago", "Jordan", None, 168_00).await?;

        ctx.create_item("Samba", "Adidas", None, 100_00).await?;
        ctx.prices.record_sale(item.id, Price::new(445_00)).await?;

        let page = ctx
            .listings
            .browse(
                CatalogQuery {
                    max_price: Some(300_00),
                    ..CatalogQuery::default()
                },
                CatalogOrder::Random,
            )
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Samba");

        let page = ctx
            .listings
            .browse(
                CatalogQuery {
                    min_price: Some(300_00),
                    ..CatalogQuery::default()
                },
                CatalogOrder::Random,
            )
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].display_price, Price::new(450_00));

        Ok(())
    }

    #[tokio::test]
    async fn pages_partition_the_catalog() -> TestResult {
        let ctx = TestContext::new().await;

        for n in 0..(PAGE_SIZE + 5) {
            ctx.create_item(&format!("Item {n}"), "Bulk", None, 10_00).await?;
        }

        let mut seen = Vec::new();

        for page in 1..=3 {
            let result = ctx
                .listings
                .browse(
                    CatalogQuery {
                        page: Some(page),
                        ..CatalogQuery::default()
                    },
                    CatalogOrder::Seeded(7),
                )
                .await?;

            assert_eq!(result.total, PAGE_SIZE + 5);
            assert_eq!(result.total_pages, 2);
            assert_eq!(result.page, u64::try_from(page)?);

            seen.extend(result.items.into_iter().map(|item| item.id));
        }

        let total = seen.len();

        seen.sort();
        seen.dedup();

        assert_eq!(total, usize::try_from(PAGE_SIZE + 5)?);
        assert_eq!(seen.len(), total);

        Ok(())
    }

    #[tokio::test]
    async fn seeded_browse_is_reproducible() -> TestResult {
        let ctx = TestContext::new().await;

        for n in 0..20 {
            ctx.create_item(&format!("Item {n}"), "Bulk", None, 10_00).await?;
        }

        let ids = |page: CatalogPage<CatalogItem>| -> Vec<ItemId> {
            page.items.into_iter().map(|item| item.id).collect()
        };

        let first = ctx
            .listings
            .browse(CatalogQuery::default(), CatalogOrder::Seeded(42))
            .await?;
        let second = ctx
            .listings
            .browse(CatalogQuery::default(), CatalogOrder::Seeded(42))
            .await?;

        assert_eq!(ids(first), ids(second));

        Ok(())
    }

    #[tokio::test]
    async fn detail_exposes_prices_inventory_history_and_sizes() -> TestResult {
        let ctx = TestContext::new().await;
        let sneakers = ctx.create_category("Sneakers", "sneakers", &["US 9", "US 10"]).await?;
        let item = ctx.create_item("Air Max 1", "Nike", Some(sneakers.id), 133_00).await?;

        ctx.prices.record_sale(item.id, Price::new(87_00)).await?;
        ctx.prices.record_sale(item.id, Price::new(145_00)).await?;

        ctx.inventory
            .create_listing(NewListing {
                seller: None,
                item: item.id,
                size: "US 9".to_string(),
                price: Price::new(160_00),
                stock: 1,
            })
            .await?;

        let detail = ctx.listings.item_detail(item.id).await?;

        assert_eq!(detail.item.id, item.id);
        assert_eq!(detail.display_price, Price::new(150_00));
        assert_eq!(detail.resolved_price, Price::new(145_00));
        assert_eq!(detail.retail_price, Price::new(133_00));
        assert_eq!(detail.inventory.len(), 1);
        assert_eq!(detail.inventory[0].size, "US 9");
        assert_eq!(detail.price_history.len(), 3);
        assert_eq!(
            detail
                .valid_sizes
                .iter()
                .map(|size| size.value.as_str())
                .collect::<Vec<_>>(),
            vec!["US 9", "US 10"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn detail_of_uncategorised_item_has_no_sizes() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_item("Mystery Box", "Grailify", None, 50_00).await?;

        let detail = ctx.listings.item_detail(item.id).await?;

        assert!(detail.valid_sizes.is_empty());
        assert!(detail.inventory.is_empty());

        Ok(())
    }

    #[test]
    fn failed_size_lookup_yields_no_sizes() {
        let item = ItemId::from_i64(1);

        let sizes = valid_sizes_or_empty(item, Err(sqlx::Error::PoolTimedOut));

        assert!(sizes.is_empty());
    }

    #[test]
    fn loaded_sizes_are_kept() {
        let item = ItemId::from_i64(1);
        let size = SizeRecord {
            id: SizeId::from_i64(3),
            category_id: CategoryId::from_i64(2),
            value: "US 10".to_string(),
        };

        let sizes = valid_sizes_or_empty(item, Ok(vec![size.clone()]));

        assert_eq!(sizes, vec![size]);
    }

    #[tokio::test]
    async fn detail_survives_failed_size_lookup() -> TestResult {
        let ctx = TestContext::new().await;
        let sneakers = ctx.create_category("Sneakers", "sneakers", &["US 9"]).await?;
        let item = ctx.create_item("Air Max 1", "Nike", Some(sneakers.id), 133_00).await?;

        // Only the size lookup compares sizes.category_id, so this breaks it alone.
        sqlx::query(
            "ALTER TABLE sizes DROP CONSTRAINT sizes_category_fk, \
             ALTER COLUMN category_id TYPE TEXT",
        )
        .execute(ctx.db.pool())
        .await?;

        let detail = ctx.listings.item_detail(item.id).await?;

        assert_eq!(detail.item.id, item.id);
        assert_eq!(detail.display_price, Price::new(140_00));
        assert!(detail.valid_sizes.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn detail_of_unknown_item_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.listings.item_detail(ItemId::from_i64(9_999)).await;

        assert!(
            matches!(result, Err(ListingsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn search_matches_name_or_brand() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_item("Air Max", "Nike", None, 133_00).await?;
        ctx.create_item("Retro Runner", "Air Co", None, 90_00).await?;
        ctx.create_item("Samba", "Adidas", None, 100_00).await?;

        let results = ctx.listings.search("air".to_string()).await?;

        let names: Vec<_> = results.iter().map(|result| result.name.as_str()).collect();

        assert_eq!(names, vec!["Air Max", "Retro Runner"]);

        Ok(())
    }

    #[tokio::test]
    async fn search_is_capped_and_literal() -> TestResult {
        let ctx = TestContext::new().await;

        for n in 0..12 {
            ctx.create_item(&format!("Jordan {n}"), "Nike", None, 10_00).await?;
        }

        ctx.create_item("100% Wool", "Knits", None, 10_00).await?;

        assert_eq!(ctx.listings.search("jordan".to_string()).await?.len(), 10);
        assert_eq!(ctx.listings.search("%".to_string()).await?.len(), 1);
        assert!(ctx.listings.search("   ".to_string()).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn trending_groups_top_sellers_by_category() -> TestResult {
        let ctx = TestContext::new().await;
        let sneakers = ctx.create_category("Sneakers", "sneakers", &[]).await?;
        let apparel = ctx.create_category("Apparel", "apparel", &[]).await?;
        let accessories = ctx.create_category("Accessories", "accessories", &[]).await?;

        let mut sneaker_ids = Vec::new();

        for (n, sales) in [0_u32, 3, 1, 5, 2].into_iter().enumerate() {
            let item = ctx
                .create_item(&format!("Sneaker {n}"), "Nike", Some(sneakers.id), 100_00)
                .await?;

            for _ in 0..sales {
                ctx.listings.record_sale(item.id, None).await?;
            }

            sneaker_ids.push(item.id);
        }

        let tee = ctx.create_item("Tee", "Basics", Some(apparel.id), 20_00).await?;
        let cap = ctx.create_item("Cap", "Basics", Some(accessories.id), 15_00).await?;

        ctx.listings.record_sale(cap.id, None).await?;

        let trending = ctx.listings.trending().await?;

        let primary: Vec<_> = trending.primary.iter().map(|item| item.id).collect();
        let secondary: Vec<_> = trending.secondary.iter().map(|item| item.id).collect();

        assert_eq!(
            primary,
            vec![sneaker_ids[3], sneaker_ids[1], sneaker_ids[4], sneaker_ids[2]]
        );
        assert_eq!(secondary, vec![cap.id, tee.id]);
        assert_eq!(trending.primary[0].display_price, Price::new(100_00));

        Ok(())
    }

    #[tokio::test]
    async fn record_sale_defaults_to_display_price() -> TestResult {
        let ctx = TestContext::new().await;
        let item = ctx.create_item("Air Max 1", "Nike", None, 133_00).await?;

        let event = ctx.listings.record_sale(item.id, None).await?;

        assert_eq!(event.kind, PriceKind::Sale);
        assert_eq!(event.price, Price::new(133_00));

        let explicit = ctx.listings.record_sale(item.id, Some(Price::new(180_00))).await?;

        assert_eq!(explicit.price, Price::new(180_00));
        assert_eq!(ctx.catalog.get_item(item.id).await?.units_sold, 2);
        assert_eq!(
            ctx.prices.resolve_display_price(item.id).await?.resolved,
            Price::new(180_00)
        );

        Ok(())
    }

    #[tokio::test]
    async fn record_sale_rejects_bad_ids() {
        let ctx = TestContext::new().await;

        let invalid = ctx.listings.record_sale(ItemId::from_i64(0), None).await;
        let unknown = ctx
            .listings
            .record_sale(ItemId::from_i64(9_999), Some(Price::new(10_00)))
            .await;

        assert_eq!(invalid.err().map(|e| e.kind()), Some(ErrorKind::InvalidArgument));
        assert!(
            matches!(unknown, Err(ListingsServiceError::NotFound)),
            "expected NotFound, got {unknown:?}"
        );
    }

    #[tokio::test]
    async fn sell_page_groups_items_under_categories() -> TestResult {
        let ctx = TestContext::new().await;
        let sneakers = ctx.create_category("Sneakers", "sneakers", &[]).await?;
        ctx.create_category("Apparel", "apparel", &[]).await?;

        let slow = ctx.create_item("Slow", "Nike", Some(sneakers.id), 100_00).await?;
        let fast = ctx.create_item("Fast", "Nike", Some(sneakers.id), 100_00).await?;
        ctx.create_item("Loose", "Nike", None, 100_00).await?;

        ctx.listings.record_sale(fast.id, None).await?;

        let page = ctx.listings.sell_page().await?;

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].category.slug, "apparel");
        assert!(page[0].items.is_empty());
        assert_eq!(page[1].category.slug, "sneakers");
        assert_eq!(
            page[1].items.iter().map(|item| item.id).collect::<Vec<_>>(),
            vec![fast.id, slow.id]
        );

        let names: Vec<_> = ctx
            .listings
            .categories()
            .await?
            .into_iter()
            .map(|category| category.name)
            .collect();

        assert_eq!(names, vec!["Apparel", "Sneakers"]);

        Ok(())
    }
}
