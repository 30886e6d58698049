//! Integration tests for the bundled catalog fixture.

use std::path::PathBuf;

use testresult::TestResult;

use grailify::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/catalog.yml")
}

#[test]
fn bundled_catalog_is_valid() -> TestResult {
    let seed = CatalogFixture::from_path(fixture_path())?.into_seed()?;

    assert_eq!(seed.currency.iso_alpha_code, "USD");
    assert_eq!(seed.categories.len(), 5);
    assert!(
        seed.items.iter().all(|item| item.category.is_some()),
        "every bundled item should belong to a category"
    );

    Ok(())
}

#[test]
fn bundled_catalog_display_prices_follow_latest_sale() -> TestResult {
    let seed = CatalogFixture::from_path(fixture_path())?.into_seed()?;

    let air_max = seed
        .items
        .iter()
        .find(|item| item.name.starts_with("Air Max 1"))
        .ok_or("Air Max 1 missing from fixture")?;

    let latest_sale = air_max.sales.last().copied().unwrap_or(air_max.price);

    assert_eq!(latest_sale, Price::new(214_00));
    assert_eq!(latest_sale.ceil_to_ten(seed.currency), Price::new(220_00));

    let ps5 = seed
        .items
        .iter()
        .find(|item| item.name.starts_with("PlayStation"))
        .ok_or("PlayStation missing from fixture")?;

    assert!(ps5.sales.is_empty(), "console has no sales");
    assert_eq!(ps5.price.ceil_to_ten(seed.currency), Price::new(500_00));

    Ok(())
}

#[test]
fn bundled_catalog_browse_plan_spans_one_page() {
    let plan = CatalogQuery {
        category: Some("allgrails".to_string()),
        ..CatalogQuery::default()
    }
    .build(rusty_money::iso::USD);

    let ids: Vec<usize> = (0..9).collect();
    let page = plan.pagination.paginate(ids, CatalogOrder::Random);

    assert_eq!(plan.filter, CatalogFilter::default());
    assert_eq!(page.total, 9);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 9);
    assert!(PAGE_SIZE >= 9);
}

#[test]
fn fixture_file_with_unknown_currency_is_rejected() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;

    std::io::Write::write_all(
        &mut file,
        b"categories:\n  - name: Sneakers\n    slug: sneakers\nitems:\n  - name: Samba\n    brand: Adidas\n    category: sneakers\n    price: 100.00 XYZ\n",
    )?;

    let result = CatalogFixture::from_path(file.path())?.into_seed();

    assert!(
        matches!(result, Err(FixtureError::UnknownCurrency(_))),
        "unexpected result: {result:?}"
    );

    Ok(())
}
