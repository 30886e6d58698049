//! Catalog Config

use clap::Args;
use grailify::inventory::DEFAULT_PLATFORM_SELLER;
use rusty_money::iso::Currency;

use crate::domain::listings::{ListingsConfig, TrendingConfig};

/// Catalog presentation settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Seller label shown for platform-owned listings
    #[arg(long, env = "PLATFORM_SELLER_NAME", default_value = DEFAULT_PLATFORM_SELLER)]
    pub platform_seller_name: String,

    /// Category slugs feeding the primary trending group
    #[arg(
        long,
        env = "TRENDING_PRIMARY_CATEGORIES",
        value_delimiter = ',',
        default_value = "sneakers"
    )]
    pub trending_primary_categories: Vec<String>,

    /// Category slugs feeding the secondary trending group
    #[arg(
        long,
        env = "TRENDING_SECONDARY_CATEGORIES",
        value_delimiter = ',',
        default_value = "apparel,accessories"
    )]
    pub trending_secondary_categories: Vec<String>,
}

impl CatalogConfig {
    #[must_use]
    pub fn listings_config(&self, currency: &'static Currency) -> ListingsConfig {
        ListingsConfig {
            platform_seller: self.platform_seller_name.clone(),
            trending: TrendingConfig {
                primary: self.trending_primary_categories.clone(),
                secondary: self.trending_secondary_categories.clone(),
            },
            currency,
        }
    }
}
