//! Catalog Queries
//!
//! Normalises the buyer-facing browse options into a [`CatalogFilter`] and a
//! [`Pagination`], and applies the catalog ordering policy to the matching
//! item ids.
//!
//! Catalog pages have no stable sort key. Matching ids are shuffled on every
//! request so that exposure is spread across all matching items; repeated
//! identical requests may place an item on different pages. Pass
//! [`CatalogOrder::Seeded`] to make a request reproducible.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom, thread_rng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use rusty_money::iso::Currency;

use crate::prices::{Price, minor_units_per_major};

/// Fixed number of items on a catalog page.
pub const PAGE_SIZE: u64 = 50;

/// Category values meaning "no category restriction".
pub const ALL_CATEGORIES: [&str; 2] = ["all", "allgrails"];

/// Price filters are only applied strictly below this many whole currency
/// units.
pub const PRICE_FILTER_CEILING: u64 = 5_000;

/// Brand set used by a catalog filter.
pub type BrandSet = SmallVec<[String; 4]>;

/// Raw browse options as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogQuery {
    /// Category slug, or one of [`ALL_CATEGORIES`].
    pub category: Option<String>,

    /// Brands to restrict to (case-insensitive).
    #[serde(default)]
    pub brands: Vec<String>,

    /// Lower bound on the display price, in minor units.
    pub min_price: Option<u64>,

    /// Upper bound on the display price, in minor units.
    pub max_price: Option<u64>,

    /// 1-indexed page number.
    pub page: Option<i64>,
}

/// Normalised predicates; every present predicate must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Lower-cased category slug.
    pub category: Option<String>,

    /// Lower-cased, de-duplicated brand names.
    pub brands: Option<BrandSet>,

    /// Inclusive lower bound on the resolved display price.
    pub min_price: Option<Price>,

    /// Inclusive upper bound on the resolved display price.
    pub max_price: Option<Price>,
}

/// Query plan built from a [`CatalogQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPlan {
    /// Predicates to evaluate against the store.
    pub filter: CatalogFilter,

    /// Requested page.
    pub pagination: Pagination,
}

impl CatalogQuery {
    /// Normalise the options into a query plan. Price bounds are minor units
    /// of `currency`.
    pub fn build(&self, currency: &Currency) -> CatalogPlan {
        let ceiling = PRICE_FILTER_CEILING.saturating_mul(minor_units_per_major(currency));

        CatalogPlan {
            filter: CatalogFilter {
                category: normalise_category(self.category.as_deref()),
                brands: normalise_brands(&self.brands),
                min_price: price_bound(self.min_price, ceiling),
                max_price: price_bound(self.max_price, ceiling),
            },
            pagination: Pagination::new(self.page),
        }
    }
}

fn normalise_category(category: Option<&str>) -> Option<String> {
    let slug = category?.trim().to_lowercase();

    if slug.is_empty() || ALL_CATEGORIES.contains(&slug.as_str()) {
        return None;
    }

    Some(slug)
}

fn normalise_brands(brands: &[String]) -> Option<BrandSet> {
    let mut set: BrandSet = brands
        .iter()
        .map(|brand| brand.trim().to_lowercase())
        .filter(|brand| !brand.is_empty())
        .collect();

    set.sort_unstable();
    set.dedup();

    (!set.is_empty()).then_some(set)
}

fn price_bound(value: Option<u64>, ceiling: u64) -> Option<Price> {
    value
        .filter(|value| *value > 0 && *value < ceiling)
        .map(Price::new)
}

/// Ordering applied to matching catalog items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogOrder {
    /// Fresh random order on every request.
    #[default]
    Random,

    /// Random order derived from a caller-supplied seed.
    Seeded(u64),
}

impl From<Option<u64>> for CatalogOrder {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(CatalogOrder::Random, CatalogOrder::Seeded)
    }
}

/// A page of catalog results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPage<T> {
    /// Items on this page.
    pub items: Vec<T>,

    /// Total number of matching items across all pages.
    pub total: u64,

    /// `ceil(total / PAGE_SIZE)`.
    pub total_pages: u64,

    /// The page that was returned.
    pub page: u64,
}

impl<T> CatalogPage<T> {
    /// Replace the items of this page, keeping the totals.
    pub fn map<U, F>(self, f: F) -> CatalogPage<U>
    where
        F: FnMut(T) -> U,
    {
        CatalogPage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            total_pages: self.total_pages,
            page: self.page,
        }
    }
}

/// Requested page of a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Pagination {
    /// Build from a caller-supplied page; missing or values below one select page one.
    pub fn new(page: Option<i64>) -> Self {
        let page = page
            .and_then(|page| u64::try_from(page).ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        Self { page }
    }

    /// 1-indexed page number.
    pub const fn page(self) -> u64 {
        self.page
    }

    /// Number of items per page.
    pub const fn page_size(self) -> u64 {
        PAGE_SIZE
    }

    /// Number of matching items before this page.
    pub const fn offset(self) -> u64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }

    /// Total pages needed for `total` matching items.
    pub const fn total_pages(total: u64) -> u64 {
        total.div_ceil(PAGE_SIZE)
    }

    /// Order the matching ids and cut out this page.
    pub fn paginate<T>(self, mut matching: Vec<T>, order: CatalogOrder) -> CatalogPage<T> {
        match order {
            CatalogOrder::Random => matching.shuffle(&mut thread_rng()),
            CatalogOrder::Seeded(seed) => matching.shuffle(&mut StdRng::seed_from_u64(seed)),
        }

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let page_size = usize::try_from(PAGE_SIZE).unwrap_or(usize::MAX);

        CatalogPage {
            items: matching.into_iter().skip(offset).take(page_size).collect(),
            total,
            total_pages: Self::total_pages(total),
            page: self.page,
        }
    }
}

/// Maximum number of search hits.
pub const SEARCH_LIMIT: u64 = 10;

/// Number of items in each trending group.
pub const TRENDING_LIMIT: u64 = 4;

/// Case-insensitive substring pattern for a search term.
///
/// Returns `None` for a blank term. `%`, `_` and `\` in the term match
/// literally.
pub fn search_pattern(term: &str) -> Option<String> {
    let term = term.trim();

    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);

    pattern.push('%');

    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    Some(pattern)
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;
    use rusty_money::iso;
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn empty_and_sentinel_categories_mean_no_restriction() {
        for category in [None, Some(""), Some("  "), Some("all"), Some("AllGrails")] {
            let query = CatalogQuery {
                category: category.map(str::to_string),
                ..CatalogQuery::default()
            };

            assert_eq!(query.build(iso::USD).filter.category, None, "{category:?}");
        }
    }

    #[test]
    fn category_slug_is_lower_cased() {
        let query = CatalogQuery {
            category: Some(" Sneakers ".to_string()),
            ..CatalogQuery::default()
        };

        assert_eq!(query.build(iso::USD).filter.category.as_deref(), Some("sneakers"));
    }

    #[test]
    fn brands_are_normalised_and_deduplicated() {
        let query = CatalogQuery {
            brands: vec![
                "Nike".to_string(),
                "nike ".to_string(),
                String::new(),
                "Adidas".to_string(),
            ],
            ..CatalogQuery::default()
        };

        let expected: BrandSet = smallvec!["adidas".to_string(), "nike".to_string()];

        assert_eq!(query.build(iso::USD).filter.brands, Some(expected));
    }

    #[test]
    fn price_bounds_outside_open_interval_are_ignored() {
        let query = CatalogQuery {
            min_price: Some(0),
            max_price: Some(5_000_00),
            ..CatalogQuery::default()
        };

        let filter = query.build(iso::USD).filter;

        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, None);

        let query = CatalogQuery {
            min_price: Some(1),
            max_price: Some(4_999_99),
            ..CatalogQuery::default()
        };

        let filter = query.build(iso::USD).filter;

        assert_eq!(filter.min_price, Some(Price::new(1)));
        assert_eq!(filter.max_price, Some(Price::new(4_999_99)));
    }

    #[test]
    fn everyday_price_bounds_are_kept() {
        let query = CatalogQuery {
            min_price: Some(100_00),
            max_price: Some(300_00),
            ..CatalogQuery::default()
        };

        let filter = query.build(iso::USD).filter;

        assert_eq!(filter.min_price, Some(Price::new(100_00)));
        assert_eq!(filter.max_price, Some(Price::new(300_00)));
    }

    #[test]
    fn price_ceiling_follows_currency_exponent() {
        let query = CatalogQuery {
            max_price: Some(4_999),
            ..CatalogQuery::default()
        };

        assert_eq!(query.build(iso::JPY).filter.max_price, Some(Price::new(4_999)));

        let query = CatalogQuery {
            max_price: Some(5_000),
            ..CatalogQuery::default()
        };

        assert_eq!(query.build(iso::JPY).filter.max_price, None);
    }

    #[test]
    fn page_defaults_and_clamps_to_one() {
        assert_eq!(Pagination::new(None).page(), 1);
        assert_eq!(Pagination::new(Some(0)).page(), 1);
        assert_eq!(Pagination::new(Some(-4)).page(), 1);
        assert_eq!(Pagination::new(Some(3)).page(), 3);
        assert_eq!(Pagination::new(Some(3)).offset(), 100);
    }

    #[test]
    fn total_pages_is_ceiling_of_total_over_page_size() {
        assert_eq!(Pagination::total_pages(0), 0);
        assert_eq!(Pagination::total_pages(1), 1);
        assert_eq!(Pagination::total_pages(50), 1);
        assert_eq!(Pagination::total_pages(51), 2);
        assert_eq!(Pagination::total_pages(120), 3);
    }

    #[test]
    fn pages_cover_every_matching_item_exactly_once() {
        for total in [0_u64, 1, 49, 50, 51, 137] {
            let matching: Vec<u64> = (0..total).collect();
            let total_pages = Pagination::total_pages(total);

            let mut seen = FxHashSet::default();
            let mut count = 0_u64;

            for page in 1..=total_pages + 1 {
                let page_no = i64::try_from(page).unwrap_or(i64::MAX);

                let result = Pagination::new(Some(page_no))
                    .paginate(matching.clone(), CatalogOrder::Seeded(42));

                assert_eq!(result.total, total);
                assert_eq!(result.total_pages, total_pages);

                count += u64::try_from(result.items.len()).unwrap_or(u64::MAX);
                seen.extend(result.items);
            }

            assert_eq!(count, total, "sum of page sizes should equal total");
            assert_eq!(
                u64::try_from(seen.len()).unwrap_or(u64::MAX),
                total,
                "no item should appear on two pages"
            );
        }
    }

    #[test]
    fn page_past_end_is_empty_with_exact_totals() {
        let result = Pagination::new(Some(9)).paginate(vec![1, 2, 3], CatalogOrder::Random);

        assert!(result.items.is_empty());
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 9);
    }

    #[test]
    fn seeded_order_is_reproducible() {
        let ids: Vec<u32> = (0..200).collect();

        let first = Pagination::new(Some(2)).paginate(ids.clone(), CatalogOrder::Seeded(7));
        let second = Pagination::new(Some(2)).paginate(ids, CatalogOrder::Seeded(7));

        assert_eq!(first, second);
    }

    #[test]
    fn blank_search_terms_have_no_pattern() {
        assert_eq!(search_pattern(""), None);
        assert_eq!(search_pattern("   "), None);
    }

    #[test]
    fn search_pattern_escapes_like_metacharacters() {
        assert_eq!(search_pattern(" jordan ").as_deref(), Some("%jordan%"));
        assert_eq!(search_pattern("100%").as_deref(), Some("%100\\%%"));
        assert_eq!(search_pattern("a_b\\c").as_deref(), Some("%a\\_b\\\\c%"));
    }
}
