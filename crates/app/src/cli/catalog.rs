use std::{io::Write, path::PathBuf};

use clap::{Args, Subcommand};
use grailify::{catalog::CatalogQuery, fixtures::CatalogFixture};
use grailify_app::{context::AppContext, domain::listings::models::CatalogItem};

use super::output::{TableOutput, optional, write_json, write_line};

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Load categories, sizes, items, sales and platform listings from YAML
    Seed(SeedArgs),

    /// One page of the catalog
    Browse(BrowseArgs),

    /// Items whose name or brand contains a term
    Search(SearchArgs),

    /// Item page with prices, inventory and history
    Detail(DetailArgs),

    /// Best sellers of the trending category groups
    Trending(FormatArgs),

    /// All categories
    Categories(FormatArgs),

    /// Every category with its items, for sellers picking what to list
    SellPage(FormatArgs),
}

#[derive(Debug, Args)]
struct FormatArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// Catalog fixture file
    #[arg(long)]
    file: PathBuf,
}

#[derive(Debug, Args)]
struct BrowseArgs {
    /// Category slug; `all` or `allgrails` for every category
    #[arg(long)]
    category: Option<String>,

    /// Brand to include (repeatable)
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Lower display price bound in minor units; ignored unless below 5000.00
    #[arg(long)]
    min_price: Option<u64>,

    /// Upper display price bound in minor units; ignored unless below 5000.00
    #[arg(long)]
    max_price: Option<u64>,

    /// 1-indexed page
    #[arg(long)]
    page: Option<i64>,

    /// Shuffle seed, for a reproducible page order
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    format: FormatArgs,
}

#[derive(Debug, Args)]
struct SearchArgs {
    term: String,

    #[command(flatten)]
    format: FormatArgs,
}

#[derive(Debug, Args)]
struct DetailArgs {
    item: i64,

    #[command(flatten)]
    format: FormatArgs,
}

pub(crate) async fn run(
    command: CatalogCommand,
    ctx: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Seed(args) => seed(args, ctx, out).await,
        CatalogSubcommand::Browse(args) => browse(args, ctx, out).await,
        CatalogSubcommand::Search(args) => search(args, ctx, out).await,
        CatalogSubcommand::Detail(args) => detail(args, ctx, out).await,
        CatalogSubcommand::Trending(args) => trending(args, ctx, out).await,
        CatalogSubcommand::Categories(args) => categories(args, ctx, out).await,
        CatalogSubcommand::SellPage(args) => sell_page(args, ctx, out).await,
    }
}

async fn seed(args: SeedArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let seed = CatalogFixture::from_path(&args.file)
        .and_then(CatalogFixture::into_seed)
        .map_err(|error| format!("failed to load {}: {error}", args.file.display()))?;

    let report = ctx
        .catalog
        .seed_catalog(seed)
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    write_line(out, &format!("categories: {}", report.categories))?;
    write_line(out, &format!("sizes: {}", report.sizes))?;
    write_line(out, &format!("items: {}", report.items))?;
    write_line(out, &format!("sales: {}", report.sales))?;
    write_line(out, &format!("listings: {}", report.listings))
}

fn item_table<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> TableOutput {
    let mut table = TableOutput::new(["ID", "Name", "Brand", "Sold", "Price"]).numeric(&[0, 3, 4]);

    for item in items {
        table.row([
            item.id.to_string(),
            item.name.clone(),
            item.brand.clone(),
            item.units_sold.to_string(),
            item.display_price.to_string(),
        ]);
    }

    table
}

async fn browse(args: BrowseArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let query = CatalogQuery {
        category: args.category,
        brands: args.brands,
        min_price: args.min_price,
        max_price: args.max_price,
        page: args.page,
    };

    let page = ctx
        .listings
        .browse(query, args.seed.into())
        .await
        .map_err(|error| format!("failed to browse catalog: {error}"))?;

    if args.format.json {
        return write_json(out, &page);
    }

    item_table(&page.items).write(out)?;

    write_line(
        out,
        &format!(
            "page {} of {} ({} items)",
            page.page, page.total_pages, page.total
        ),
    )
}

async fn search(args: SearchArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let results = ctx
        .listings
        .search(args.term)
        .await
        .map_err(|error| format!("failed to search catalog: {error}"))?;

    if args.format.json {
        return write_json(out, &results);
    }

    if results.is_empty() {
        return write_line(out, "no matching items");
    }

    let mut table = TableOutput::new(["ID", "Name", "Brand"]).numeric(&[0]);

    for result in &results {
        table.row([
            result.id.to_string(),
            result.name.clone(),
            result.brand.clone(),
        ]);
    }

    table.write(out)
}

async fn detail(args: DetailArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let detail = ctx
        .listings
        .item_detail(args.item.into())
        .await
        .map_err(|error| format!("failed to load item {}: {error}", args.item))?;

    if args.format.json {
        return write_json(out, &detail);
    }

    write_line(out, &format!("{} ({})", detail.item.name, detail.item.brand))?;
    write_line(out, &format!("display_price: {}", detail.display_price))?;
    write_line(out, &format!("retail_price: {}", detail.retail_price))?;
    write_line(out, &format!("units_sold: {}", detail.item.units_sold))?;

    let sizes: Vec<&str> = detail
        .valid_sizes
        .iter()
        .map(|size| size.value.as_str())
        .collect();

    write_line(out, &format!("sizes: {}", sizes.join(", ")))?;

    if detail.inventory.is_empty() {
        write_line(out, "no listings in stock")?;
    } else {
        let mut table =
            TableOutput::new(["Listing", "Size", "Seller", "Stock", "Price"]).numeric(&[0, 3, 4]);

        for listing in &detail.inventory {
            table.row([
                listing.listing_id.to_string(),
                listing.size.clone(),
                listing.seller.clone(),
                listing.stock.to_string(),
                listing.price.to_string(),
            ]);
        }

        table.write(out)?;
    }

    let mut history = TableOutput::new(["Recorded", "Kind", "Price"]).numeric(&[2]);

    for event in &detail.price_history {
        history.row([
            event.recorded_at.to_string(),
            event.kind.as_str().to_string(),
            event.price.to_string(),
        ]);
    }

    history.write(out)
}

async fn trending(args: FormatArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let trending = ctx
        .listings
        .trending()
        .await
        .map_err(|error| format!("failed to load trending items: {error}"))?;

    if args.json {
        return write_json(out, &trending);
    }

    item_table(&trending.primary).write(out)?;
    item_table(&trending.secondary).write(out)
}

async fn categories(
    args: FormatArgs,
    ctx: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    let categories = ctx
        .listings
        .categories()
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    if args.json {
        return write_json(out, &categories);
    }

    let mut table = TableOutput::new(["ID", "Name", "Slug"]).numeric(&[0]);

    for category in &categories {
        table.row([
            category.id.to_string(),
            category.name.clone(),
            category.slug.clone(),
        ]);
    }

    table.write(out)
}

async fn sell_page(args: FormatArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let groups = ctx
        .listings
        .sell_page()
        .await
        .map_err(|error| format!("failed to load sell page: {error}"))?;

    if args.json {
        return write_json(out, &groups);
    }

    for group in &groups {
        write_line(out, &group.category.name)?;

        let mut table = TableOutput::new(["ID", "Name", "Brand", "Released"]).numeric(&[0]);

        for item in &group.items {
            table.row([
                item.id.to_string(),
                item.name.clone(),
                item.brand.clone(),
                optional(item.release_date),
            ]);
        }

        table.write(out)?;
    }

    Ok(())
}
