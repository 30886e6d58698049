//! Inventory Repository

use grailify::{inventory::size_label, prices::Price};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    catalog::records::{ItemId, SizeId},
    columns::{bind_price, bind_quantity, try_get_price, try_get_quantity},
    inventory::{
        models::{InventoryView, SellerListingView},
        records::{ListingId, ListingRecord},
    },
    users::records::UserId,
};

const LIST_INVENTORY_SQL: &str = include_str!("sql/list_inventory.sql");
const ITEM_EXISTS_SQL: &str = include_str!("sql/item_exists.sql");
const FIND_ITEM_SIZE_SQL: &str = include_str!("sql/find_item_size.sql");
const CREATE_LISTING_SQL: &str = include_str!("sql/create_listing.sql");
const UPDATE_LISTING_SQL: &str = include_str!("sql/update_listing.sql");
const DELETE_LISTING_SQL: &str = include_str!("sql/delete_listing.sql");
const LIST_SELLER_LISTINGS_SQL: &str = include_str!("sql/list_seller_listings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// In-stock listings, cheapest first.
    pub(crate) async fn list_inventory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
        platform_seller: &str,
    ) -> Result<Vec<InventoryView>, sqlx::Error> {
        query(LIST_INVENTORY_SQL)
            .bind(item.into_i64())
            .bind(platform_seller)
            .try_map(|row: PgRow| {
                Ok(InventoryView {
                    listing_id: ListingId::from_i64(row.try_get("id")?),
                    size: size_label(row.try_get("size_value")?),
                    price: try_get_price(&row, "price")?,
                    stock: try_get_quantity(&row, "stock")?,
                    seller: row.try_get("seller_name")?,
                })
            })
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn item_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(ITEM_EXISTS_SQL)
            .bind(item.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Case-insensitive lookup of a size within the item's category.
    pub(crate) async fn find_item_size(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
        value: &str,
    ) -> Result<Option<SizeId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(FIND_ITEM_SIZE_SQL)
            .bind(item.into_i64())
            .bind(value)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(id.map(SizeId::from_i64))
    }

    pub(crate) async fn create_listing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemId,
        seller: Option<UserId>,
        size: Option<SizeId>,
        price: Price,
        stock: u32,
    ) -> Result<ListingRecord, sqlx::Error> {
        query_as::<Postgres, ListingRecord>(CREATE_LISTING_SQL)
            .bind(item.into_i64())
            .bind(seller.map(UserId::into_i64))
            .bind(size.map(SizeId::into_i64))
            .bind(bind_price("price", price)?)
            .bind(bind_quantity("stock", stock)?)
            .fetch_one(&mut **tx)
            .await
    }

    /// `None` when no listing with this id belongs to the seller.
    pub(crate) async fn update_listing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        seller: UserId,
        listing: ListingId,
        price: Price,
        stock: u32,
    ) -> Result<Option<ListingRecord>, sqlx::Error> {
        query_as::<Postgres, ListingRecord>(UPDATE_LISTING_SQL)
            .bind(listing.into_i64())
            .bind(seller.into_i64())
            .bind(bind_price("price", price)?)
            .bind(bind_quantity("stock", stock)?)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_listing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        seller: UserId,
        listing: ListingId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LISTING_SQL)
            .bind(listing.into_i64())
            .bind(seller.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_seller_listings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        seller: UserId,
    ) -> Result<Vec<SellerListingView>, sqlx::Error> {
        query(LIST_SELLER_LISTINGS_SQL)
            .bind(seller.into_i64())
            .try_map(|row: PgRow| {
                Ok(SellerListingView {
                    listing_id: ListingId::from_i64(row.try_get("id")?),
                    item_id: ItemId::from_i64(row.try_get("item_id")?),
                    item_name: row.try_get("item_name")?,
                    item_image_url: row.try_get("item_image_url")?,
                    size: size_label(row.try_get("size_value")?),
                    price: try_get_price(&row, "price")?,
                    stock: try_get_quantity(&row, "stock")?,
                    created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
                })
            })
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ListingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ListingId::from_i64(row.try_get("id")?),
            item_id: ItemId::from_i64(row.try_get("item_id")?),
            seller_id: row
                .try_get::<Option<i64>, _>("seller_id")?
                .map(UserId::from_i64),
            size_id: row.try_get::<Option<i64>, _>("size_id")?.map(SizeId::from_i64),
            price: try_get_price(row, "price")?,
            stock: try_get_quantity(row, "stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
