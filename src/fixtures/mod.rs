//! Fixtures
//!
//! YAML catalog fixtures used to seed a store with categories, sizes, items,
//! sale history and platform listings.

use std::{fs, path::Path};

use jiff::Timestamp;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

use crate::{inventory::SizeSelection, prices::Price};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Item references a category that is not defined
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Listing references a size its item's category does not offer
    #[error("Size {size} not offered for item {item}")]
    SizeNotFound {
        /// Item name
        item: String,
        /// Requested size
        size: String,
    },
}

/// Catalog fixture file.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Categories, in insertion order.
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,

    /// Items, in insertion order.
    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

/// Category fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Display name
    pub name: String,

    /// Slug
    pub slug: String,

    /// Valid sizes for items in this category
    #[serde(default)]
    pub sizes: Vec<String>,
}

/// Item fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Brand
    pub brand: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Category slug
    pub category: Option<String>,

    /// Retail price (e.g., "133.00 USD")
    pub price: String,

    /// Image reference
    #[serde(default)]
    pub image_url: String,

    /// Release timestamp
    pub release_date: Option<Timestamp>,

    /// Sale prices, oldest first
    #[serde(default)]
    pub sales: Vec<String>,

    /// Platform listings
    #[serde(default)]
    pub listings: Vec<ListingFixture>,
}

/// Platform listing fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ListingFixture {
    /// Size value; omitted for one-size items
    pub size: Option<String>,

    /// Asking price (e.g., "150.00 USD")
    pub price: String,

    /// Units in stock
    pub stock: u32,
}

/// Validated catalog ready to be written to a store.
#[derive(Debug, Clone)]
pub struct CatalogSeed {
    /// Currency shared by every price in the fixture
    pub currency: &'static Currency,

    /// Categories to create
    pub categories: Vec<CategorySeed>,

    /// Items to create
    pub items: Vec<ItemSeed>,
}

/// Validated category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySeed {
    /// Display name
    pub name: String,

    /// Slug
    pub slug: String,

    /// Size values
    pub sizes: Vec<String>,
}

/// Validated item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSeed {
    /// Item name
    pub name: String,

    /// Brand
    pub brand: String,

    /// Description
    pub description: String,

    /// Category slug
    pub category: Option<String>,

    /// Retail price
    pub price: Price,

    /// Image reference
    pub image_url: String,

    /// Release timestamp
    pub release_date: Option<Timestamp>,

    /// Sale prices, oldest first
    pub sales: Vec<Price>,

    /// Platform listings
    pub listings: Vec<ListingSeed>,
}

/// Validated platform listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSeed {
    /// Size value, `None` for one size
    pub size: Option<String>,

    /// Asking price
    pub price: Price,

    /// Units in stock
    pub stock: u32,
}

impl CatalogFixture {
    /// Read a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Parse fixture YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid catalog fixture.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Validate references and parse prices.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed prices, mixed currencies, unknown
    /// categories, or listing sizes the item's category does not offer.
    pub fn into_seed(self) -> Result<CatalogSeed, FixtureError> {
        let mut currency = None;

        let sizes_by_category: FxHashMap<String, FxHashSet<String>> = self
            .categories
            .iter()
            .map(|category| {
                (
                    category.slug.to_lowercase(),
                    category.sizes.iter().cloned().collect(),
                )
            })
            .collect();

        let mut items = Vec::with_capacity(self.items.len());

        for item in self.items {
            let sizes = match &item.category {
                Some(slug) => Some(
                    sizes_by_category
                        .get(&slug.to_lowercase())
                        .ok_or_else(|| FixtureError::CategoryNotFound(slug.clone()))?,
                ),
                None => None,
            };

            let mut listings = Vec::with_capacity(item.listings.len());

            for listing in item.listings {
                let size = match SizeSelection::parse(listing.size.as_deref().unwrap_or_default())
                {
                    SizeSelection::OneSize => None,
                    SizeSelection::Named(size) => {
                        if !sizes.is_some_and(|sizes| sizes.contains(size)) {
                            return Err(FixtureError::SizeNotFound {
                                item: item.name.clone(),
                                size: size.to_string(),
                            });
                        }

                        Some(size.to_string())
                    }
                };

                listings.push(ListingSeed {
                    size,
                    price: parse_in_currency(&listing.price, &mut currency)?,
                    stock: listing.stock,
                });
            }

            let sales = item
                .sales
                .iter()
                .map(|sale| parse_in_currency(sale, &mut currency))
                .collect::<Result<Vec<_>, _>>()?;

            items.push(ItemSeed {
                price: parse_in_currency(&item.price, &mut currency)?,
                name: item.name,
                brand: item.brand,
                description: item.description,
                category: item.category,
                image_url: item.image_url,
                release_date: item.release_date,
                sales,
                listings,
            });
        }

        let categories = self
            .categories
            .into_iter()
            .map(|category| CategorySeed {
                name: category.name,
                slug: category.slug,
                sizes: category.sizes,
            })
            .collect();

        Ok(CatalogSeed {
            currency: currency.unwrap_or(USD),
            categories,
            items,
        })
    }
}

fn parse_in_currency(
    s: &str,
    currency: &mut Option<&'static Currency>,
) -> Result<Price, FixtureError> {
    let (price, parsed) = parse_price(s)?;

    match currency {
        Some(expected) if expected.iso_alpha_code != parsed.iso_alpha_code => {
            Err(FixtureError::CurrencyMismatch(
                expected.iso_alpha_code.to_string(),
                parsed.iso_alpha_code.to_string(),
            ))
        }
        Some(_) => Ok(price),
        None => {
            *currency = Some(parsed);

            Ok(price)
        }
    }
}

/// Parse price string (e.g., "133.00 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Price, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = find_currency(currency_code)
        .ok_or_else(|| FixtureError::UnknownCurrency(currency_code.to_string()))?;

    Ok((Price::new(minor_units), currency))
}

/// Look up a supported ISO currency code.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    match code {
        "GBP" => Some(GBP),
        "USD" => Some(USD),
        "EUR" => Some(EUR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r#"
categories:
  - name: Sneakers
    slug: sneakers
    sizes: ["US 9", "US 10"]
  - name: Accessories
    slug: accessories
items:
  - name: Air Max 1
    brand: Nike
    category: sneakers
    price: "133.00 USD"
    sales: ["87.00 USD", "145.00 USD"]
    listings:
      - size: US 10
        price: "150.00 USD"
        stock: 2
  - name: Card Holder
    brand: Air Co
    category: accessories
    price: "40.00 USD"
    listings:
      - price: "45.00 USD"
        stock: 1
"#;

    #[test]
    fn parses_price_into_minor_units() -> TestResult {
        let (price, currency) = parse_price("133.00 USD")?;

        assert_eq!(price, Price::new(133_00));
        assert_eq!(currency.iso_alpha_code, "USD");

        Ok(())
    }

    #[test]
    fn rejects_malformed_prices() {
        assert!(matches!(
            parse_price("133.00"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("-1.00 USD"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("1.00 XYZ"),
            Err(FixtureError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn builds_seed_from_yaml() -> TestResult {
        let seed = CatalogFixture::from_yaml(CATALOG)?.into_seed()?;

        assert_eq!(seed.currency.iso_alpha_code, "USD");
        assert_eq!(seed.categories.len(), 2);
        assert_eq!(seed.items.len(), 2);

        let air_max = seed.items.first().ok_or("missing item")?;

        assert_eq!(air_max.price, Price::new(133_00));
        assert_eq!(air_max.sales, vec![Price::new(87_00), Price::new(145_00)]);
        assert_eq!(
            air_max.listings,
            vec![ListingSeed {
                size: Some("US 10".to_string()),
                price: Price::new(150_00),
                stock: 2,
            }]
        );

        let card_holder = seed.items.get(1).ok_or("missing item")?;

        assert_eq!(card_holder.listings.first().map(|l| l.size.clone()), Some(None));

        Ok(())
    }

    #[test]
    fn unknown_category_is_rejected() -> TestResult {
        let yaml = r#"
items:
  - name: Mystery
    brand: Unknown
    category: hats
    price: "10.00 USD"
"#;

        let result = CatalogFixture::from_yaml(yaml)?.into_seed();

        assert!(matches!(result, Err(FixtureError::CategoryNotFound(slug)) if slug == "hats"));

        Ok(())
    }

    #[test]
    fn listing_size_must_belong_to_category() -> TestResult {
        let yaml = r#"
categories:
  - name: Sneakers
    slug: sneakers
    sizes: ["US 9"]
items:
  - name: Air Max 1
    brand: Nike
    category: sneakers
    price: "133.00 USD"
    listings:
      - size: US 13
        price: "150.00 USD"
        stock: 1
"#;

        let result = CatalogFixture::from_yaml(yaml)?.into_seed();

        assert!(matches!(result, Err(FixtureError::SizeNotFound { .. })));

        Ok(())
    }

    #[test]
    fn mixed_currencies_are_rejected() -> TestResult {
        let yaml = r#"
items:
  - name: Air Max 1
    brand: Nike
    price: "133.00 USD"
    sales: ["120.00 GBP"]
"#;

        let result = CatalogFixture::from_yaml(yaml)?.into_seed();

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }
}
