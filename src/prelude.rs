//! Grailify prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{
        CatalogFilter, CatalogOrder, CatalogPage, CatalogPlan, CatalogQuery, PAGE_SIZE, Pagination,
        SEARCH_LIMIT, TRENDING_LIMIT, search_pattern,
    },
    fixtures::{CatalogFixture, CatalogSeed, FixtureError, find_currency, parse_price},
    inventory::{DEFAULT_PLATFORM_SELLER, ONE_SIZE, SizeSelection},
    prices::Price,
    pricing::{DisplayPrice, PriceEvent, PriceKind, resolve_display_price},
};
