//! Catalog Repository

use grailify::catalog::CatalogFilter;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgExecutor, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    domain::{
        catalog::{
            data::{NewCategory, NewItem, NewSize},
            records::{
                CategoryId, CategoryRecord, ItemId, ItemRecord, SearchResult, SizeId, SizeRecord,
            },
        },
        columns::{bind_price, try_get_count, try_get_price},
    },
    ids::to_i64s,
};

const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const CREATE_SIZE_SQL: &str = include_str!("sql/create_size.sql");
const LIST_ITEM_SIZES_SQL: &str = include_str!("sql/list_item_sizes.sql");
const CREATE_ITEM_SQL: &str = include_str!("sql/create_item.sql");
const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const LIST_ITEMS_SQL: &str = include_str!("sql/list_items.sql");
const LIST_CATEGORISED_ITEMS_SQL: &str = include_str!("sql/list_categorised_items.sql");
const MATCHING_ITEM_IDS_SQL: &str = include_str!("sql/matching_item_ids.sql");
const SEARCH_ITEMS_SQL: &str = include_str!("sql/search_items.sql");
const TOP_SELLING_ITEM_IDS_SQL: &str = include_str!("sql/top_selling_item_ids.sql");
const INCREMENT_UNITS_SOLD_SQL: &str = include_str!("sql/increment_units_sold.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &NewCategory,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(CREATE_CATEGORY_SQL)
            .bind(&category.name)
            .bind(&category.slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_size(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        size: &NewSize,
    ) -> Result<SizeRecord, sqlx::Error> {
        query_as::<Postgres, SizeRecord>(CREATE_SIZE_SQL)
            .bind(size.category.into_i64())
            .bind(&size.value)
            .fetch_one(&mut **tx)
            .await
    }

    /// Sizes of the item's category; empty for uncategorised or unknown items.
    pub(crate) async fn list_item_sizes<'e, E>(
        &self,
        executor: E,
        item: ItemId,
    ) -> Result<Vec<SizeRecord>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        query_as::<Postgres, SizeRecord>(LIST_ITEM_SIZES_SQL)
            .bind(item.into_i64())
            .fetch_all(executor)
            .await
    }

    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &NewItem,
    ) -> Result<ItemRecord, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(CREATE_ITEM_SQL)
            .bind(&item.name)
            .bind(&item.description)
            .bind(&item.brand)
            .bind(item.category.map(CategoryId::into_i64))
            .bind(bind_price("price", item.price)?)
            .bind(item.release_date.map(SqlxTimestamp::from))
            .bind(&item.image_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<ItemRecord, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(GET_ITEM_SQL)
            .bind(item.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Items with the given ids, in no particular order.
    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        items: &[ItemId],
    ) -> Result<Vec<ItemRecord>, sqlx::Error> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        query_as::<Postgres, ItemRecord>(LIST_ITEMS_SQL)
            .bind(to_i64s(items))
            .fetch_all(&mut **tx)
            .await
    }

    /// Every item with a category, best sellers first.
    pub(crate) async fn list_categorised_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ItemRecord>, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(LIST_CATEGORISED_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Ids of every item satisfying the filter, ascending.
    pub(crate) async fn matching_item_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &CatalogFilter,
    ) -> Result<Vec<ItemId>, sqlx::Error> {
        let min_price = filter
            .min_price
            .map(|price| bind_price("min_price", price))
            .transpose()?;

        let max_price = filter
            .max_price
            .map(|price| bind_price("max_price", price))
            .transpose()?;

        let ids: Vec<i64> = sqlx::query_scalar(MATCHING_ITEM_IDS_SQL)
            .bind(filter.category.as_deref())
            .bind(filter.brands.as_ref().map(|brands| brands.to_vec()))
            .bind(min_price)
            .bind(max_price)
            .fetch_all(&mut **tx)
            .await?;

        Ok(ids.into_iter().map(ItemId::from_i64).collect())
    }

    pub(crate) async fn search_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pattern: &str,
        limit: u64,
    ) -> Result<Vec<SearchResult>, sqlx::Error> {
        query(SEARCH_ITEMS_SQL)
            .bind(pattern)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .try_map(|row: PgRow| {
                Ok(SearchResult {
                    id: ItemId::from_i64(row.try_get("id")?),
                    name: row.try_get("name")?,
                    brand: row.try_get("brand")?,
                    image_url: row.try_get("image_url")?,
                })
            })
            .fetch_all(&mut **tx)
            .await
    }

    /// Best sellers across the given category slugs.
    pub(crate) async fn top_selling_item_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slugs: &[String],
        limit: u64,
    ) -> Result<Vec<ItemId>, sqlx::Error> {
        let slugs: Vec<String> = slugs.iter().map(|slug| slug.trim().to_lowercase()).collect();

        let ids: Vec<i64> = sqlx::query_scalar(TOP_SELLING_ITEM_IDS_SQL)
            .bind(slugs)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&mut **tx)
            .await?;

        Ok(ids.into_iter().map(ItemId::from_i64).collect())
    }

    pub(crate) async fn increment_units_sold(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(INCREMENT_UNITS_SOLD_SQL)
            .bind(item.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CategoryId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SizeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: SizeId::from_i64(row.try_get("id")?),
            category_id: CategoryId::from_i64(row.try_get("category_id")?),
            value: row.try_get("value")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ItemId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            brand: row.try_get("brand")?,
            category_id: row
                .try_get::<Option<i64>, _>("category_id")?
                .map(CategoryId::from_i64),
            price: try_get_price(row, "price")?,
            units_sold: try_get_count(row, "units_sold")?,
            release_date: row
                .try_get::<Option<SqlxTimestamp>, _>("release_date")?
                .map(SqlxTimestamp::to_jiff),
            image_url: row.try_get("image_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
