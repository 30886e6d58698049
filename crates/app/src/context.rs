//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::AppConfig,
    database::{self, Db},
    domain::{
        catalog::{CatalogService, PgCatalogService},
        inventory::{InventoryService, PgInventoryService},
        listings::{ListingsService, PgListingsService},
        orders::{OrdersConfig, OrdersService, PgOrdersService},
        prices::{PgPriceLedger, PriceLedger},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("unsupported currency: {0}")]
    Currency(String),
}

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub catalog: Arc<dyn CatalogService>,
    pub prices: Arc<dyn PriceLedger>,
    pub inventory: Arc<dyn InventoryService>,
    pub listings: Arc<dyn ListingsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured currency is unsupported or
    /// establishing a database connection fails.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let currency = config
            .currency
            .currency()
            .map_err(AppInitError::Currency)?;

        let pool = database::connect(&config.database.database_url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);
        let listings = config.catalog.listings_config(currency);

        Ok(Self {
            users: Arc::new(PgUsersService::new(db.clone())),
            catalog: Arc::new(PgCatalogService::new(db.clone())),
            prices: Arc::new(PgPriceLedger::new(db.clone())),
            inventory: Arc::new(PgInventoryService::new(
                db.clone(),
                listings.platform_seller.clone(),
            )),
            listings: Arc::new(PgListingsService::new(db.clone(), listings)),
            orders: Arc::new(PgOrdersService::new(
                db,
                OrdersConfig {
                    total_policy: config.checkout.total_policy,
                    currency,
                },
            )),
        })
    }
}
