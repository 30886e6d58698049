//! Application configuration

use clap::Args;

use crate::config::{
    catalog::CatalogConfig, checkout::CheckoutConfig, currency::CurrencyConfig,
    db::DatabaseConfig, observability::LoggingConfig,
};

pub mod catalog;
pub mod checkout;
pub mod currency;
pub mod db;
pub mod observability;

pub use observability::LogFormat;

/// Settings shared by every command, read from flags or the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Currency of stored prices.
    #[command(flatten)]
    pub currency: CurrencyConfig,

    /// Catalog presentation settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Checkout settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}
