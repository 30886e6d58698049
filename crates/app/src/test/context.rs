//! Test context for service-level integration tests.

use grailify::inventory::DEFAULT_PLATFORM_SELLER;

use crate::{
    database::Db,
    domain::{
        catalog::PgCatalogService,
        inventory::PgInventoryService,
        listings::{ListingsConfig, PgListingsService},
        orders::{OrdersConfig, PgOrdersService},
        prices::PgPriceLedger,
        users::PgUsersService,
    },
};

use super::db::TestDb;

/// Every service wired to one freshly migrated database.
pub struct TestContext {
    pub db: TestDb,
    pub users: PgUsersService,
    pub catalog: PgCatalogService,
    pub prices: PgPriceLedger,
    pub inventory: PgInventoryService,
    pub listings: PgListingsService,
    pub orders: PgOrdersService,
    app_db: Db,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            users: PgUsersService::new(db.clone()),
            catalog: PgCatalogService::new(db.clone()),
            prices: PgPriceLedger::new(db.clone()),
            inventory: PgInventoryService::new(db.clone(), DEFAULT_PLATFORM_SELLER),
            listings: PgListingsService::new(db.clone(), ListingsConfig::default()),
            orders: PgOrdersService::new(db.clone(), OrdersConfig::default()),
            app_db: db,
            db: test_db,
        }
    }

    /// Orders service over the same database with a different checkout policy.
    pub fn orders_with(&self, config: OrdersConfig) -> PgOrdersService {
        PgOrdersService::new(self.app_db.clone(), config)
    }
}
