//! Orders service.

use async_trait::async_trait;
use grailify::pricing::{TotalPriceError, total_price};
use mockall::automock;
use rusty_money::Money;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        orders::{
            data::{Checkout, OrdersConfig, TotalPolicy},
            errors::OrdersServiceError,
            records::{OrderId, OrderRecord, OrderSummary},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
        },
        users::records::UserId,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    config: OrdersConfig,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, config: OrdersConfig) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            config,
        }
    }

    /// Checks that need no store access. Runs before the transaction begins.
    fn validate(&self, checkout: &Checkout) -> Result<(), OrdersServiceError> {
        if checkout.lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let currency = self.config.currency;

        let declared = Money::from_minor(
            checkout.total.to_i64().map_err(TotalPriceError::from)?,
            currency,
        );

        // Fails on any line price the store cannot represent.
        let expected = total_price(checkout.lines.iter().map(|line| line.price), currency)?;

        if self.config.total_policy == TotalPolicy::Verified && declared != expected {
            return Err(OrdersServiceError::TotalMismatch {
                declared: declared.to_string(),
                expected: expected.to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, checkout),
        fields(
            user_id = %user,
            line_count = checkout.lines.len(),
            order_id = tracing::field::Empty
        ),
        err
    )]
    async fn create_order(
        &self,
        user: UserId,
        checkout: Checkout,
    ) -> Result<OrderId, OrdersServiceError> {
        self.validate(&checkout)?;

        let mut tx = self.db.begin_transaction().await?;

        let order = self
            .orders_repository
            .create_order(
                &mut tx,
                user,
                checkout.total,
                checkout.shipping_address_id,
                checkout.payment_method_id,
            )
            .await?;

        for line in &checkout.lines {
            self.items_repository
                .create_order_item(&mut tx, order, line)
                .await?;
        }

        tx.commit().await?;

        Span::current().record("order_id", tracing::field::display(order));

        info!(order_id = %order, total = %checkout.total, "created order");

        Ok(order)
    }

    #[tracing::instrument(name = "orders.service.get_order", skip(self), err)]
    async fn get_order(
        &self,
        user: UserId,
        order: OrderId,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut record = self.orders_repository.get_order(&mut tx, user, order).await?;

        let items = self.items_repository.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        record.items.extend(items);

        Ok(record)
    }

    async fn list_orders(&self, user: UserId) -> Result<Vec<OrderSummary>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let orders = self.orders_repository.list_orders(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Convert a cart into a completed order. All or nothing.
    async fn create_order(
        &self,
        user: UserId,
        checkout: Checkout,
    ) -> Result<OrderId, OrdersServiceError>;

    /// One of the user's orders with its items.
    async fn get_order(
        &self,
        user: UserId,
        order: OrderId,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// The user's orders, newest first.
    async fn list_orders(&self, user: UserId) -> Result<Vec<OrderSummary>, OrdersServiceError>;
}
