//! Fixture helpers shared by service tests.

use grailify::prices::Price;

use crate::domain::{
    catalog::{
        CatalogService,
        data::{NewCategory, NewItem, NewSize},
        errors::CatalogServiceError,
        records::{CategoryId, CategoryRecord, ItemId, ItemRecord},
    },
    users::{UsersService, data::NewUser, errors::UsersServiceError, records::UserRecord},
};

use super::TestContext;

impl TestContext {
    pub async fn create_user(&self, username: &str) -> Result<UserRecord, UsersServiceError> {
        self.users
            .create_user(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
            })
            .await
    }

    /// Create a category together with its valid sizes.
    pub async fn create_category(
        &self,
        name: &str,
        slug: &str,
        sizes: &[&str],
    ) -> Result<CategoryRecord, CatalogServiceError> {
        let category = self
            .catalog
            .create_category(NewCategory {
                name: name.to_string(),
                slug: slug.to_string(),
            })
            .await?;

        for value in sizes {
            self.catalog
                .create_size(NewSize {
                    category: category.id,
                    value: (*value).to_string(),
                })
                .await?;
        }

        Ok(category)
    }

    /// Create an item whose retail price is `price` minor units.
    pub async fn create_item(
        &self,
        name: &str,
        brand: &str,
        category: Option<CategoryId>,
        price: u64,
    ) -> Result<ItemRecord, CatalogServiceError> {
        self.catalog
            .create_item(NewItem {
                name: name.to_string(),
                description: format!("{brand} {name}"),
                brand: brand.to_string(),
                category,
                price: Price::new(price),
                release_date: None,
                image_url: format!("https://images.example.com/{}.jpg", name.replace(' ', "-")),
            })
            .await
    }

    /// Look up an item created by a seed, by exact name.
    pub async fn find_item(&self, name: &str) -> Result<ItemRecord, CatalogServiceError> {
        let id: i64 = sqlx::query_scalar("SELECT id FROM items WHERE name = $1")
            .bind(name)
            .fetch_one(self.db.pool())
            .await?;

        self.catalog.get_item(ItemId::from_i64(id)).await
    }
}
