use std::io::Write;

use clap::{Args, Subcommand};
use grailify::prices::Price;
use grailify_app::{
    context::AppContext,
    domain::inventory::data::{ListingUpdate, NewListing},
};

use super::output::{TableOutput, optional, write_json, write_line};

#[derive(Debug, Args)]
pub(crate) struct ListingCommand {
    #[command(subcommand)]
    command: ListingSubcommand,
}

#[derive(Debug, Subcommand)]
enum ListingSubcommand {
    /// In-stock listings of an item, cheapest first
    Inventory(InventoryArgs),

    /// List an item for sale
    Create(CreateListingArgs),

    /// Change price and stock of one of your listings
    Update(UpdateListingArgs),

    /// Remove one of your listings
    Delete(DeleteListingArgs),

    /// Every listing of a seller, newest first
    Mine(MineArgs),
}

#[derive(Debug, Args)]
struct InventoryArgs {
    item: i64,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct CreateListingArgs {
    /// Seller user id; omit to list as the platform
    #[arg(long)]
    seller: Option<i64>,

    #[arg(long)]
    item: i64,

    /// Size of the item's category; blank for one size
    #[arg(long, default_value = "")]
    size: String,

    /// Price in minor units
    #[arg(long)]
    price: u64,

    #[arg(long)]
    stock: u32,
}

#[derive(Debug, Args)]
struct UpdateListingArgs {
    #[arg(long)]
    seller: i64,

    #[arg(long)]
    listing: i64,

    /// Price in minor units
    #[arg(long)]
    price: u64,

    #[arg(long)]
    stock: u32,
}

#[derive(Debug, Args)]
struct DeleteListingArgs {
    #[arg(long)]
    seller: i64,

    #[arg(long)]
    listing: i64,
}

#[derive(Debug, Args)]
struct MineArgs {
    #[arg(long)]
    seller: i64,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(
    command: ListingCommand,
    ctx: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        ListingSubcommand::Inventory(args) => inventory(args, ctx, out).await,
        ListingSubcommand::Create(args) => create(args, ctx, out).await,
        ListingSubcommand::Update(args) => update(args, ctx, out).await,
        ListingSubcommand::Delete(args) => delete(args, ctx, out).await,
        ListingSubcommand::Mine(args) => mine(args, ctx, out).await,
    }
}

async fn inventory(args: InventoryArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let listings = ctx
        .inventory
        .list_inventory(args.item.into())
        .await
        .map_err(|error| format!("failed to list inventory: {error}"))?;

    if args.json {
        return write_json(out, &listings);
    }

    let mut table =
        TableOutput::new(["Listing", "Size", "Seller", "Stock", "Price"]).numeric(&[0, 3, 4]);

    for listing in &listings {
        table.row([
            listing.listing_id.to_string(),
            listing.size.clone(),
            listing.seller.clone(),
            listing.stock.to_string(),
            listing.price.to_string(),
        ]);
    }

    table.write(out)
}

async fn create(args: CreateListingArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let listing = ctx
        .inventory
        .create_listing(NewListing {
            seller: args.seller.map(Into::into),
            item: args.item.into(),
            size: args.size,
            price: Price::new(args.price),
            stock: args.stock,
        })
        .await
        .map_err(|error| format!("failed to create listing: {error}"))?;

    write_line(out, &format!("listing_id: {}", listing.id))?;
    write_line(out, &format!("size_id: {}", optional(listing.size_id)))?;
    write_line(out, &format!("price: {}", listing.price))?;
    write_line(out, &format!("stock: {}", listing.stock))
}

async fn update(args: UpdateListingArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let listing = ctx
        .inventory
        .update_listing(
            args.seller.into(),
            args.listing.into(),
            ListingUpdate {
                price: Price::new(args.price),
                stock: args.stock,
            },
        )
        .await
        .map_err(|error| format!("failed to update listing {}: {error}", args.listing))?;

    write_line(out, &format!("listing_id: {}", listing.id))?;
    write_line(out, &format!("price: {}", listing.price))?;
    write_line(out, &format!("stock: {}", listing.stock))
}

async fn delete(args: DeleteListingArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    ctx.inventory
        .delete_listing(args.seller.into(), args.listing.into())
        .await
        .map_err(|error| format!("failed to delete listing {}: {error}", args.listing))?;

    write_line(out, &format!("deleted listing {}", args.listing))
}

async fn mine(args: MineArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let listings = ctx
        .inventory
        .list_seller_listings(args.seller.into())
        .await
        .map_err(|error| format!("failed to list listings: {error}"))?;

    if args.json {
        return write_json(out, &listings);
    }

    let mut table = TableOutput::new(["Listing", "Item", "Size", "Stock", "Price", "Listed"])
        .numeric(&[0, 3, 4]);

    for listing in &listings {
        table.row([
            listing.listing_id.to_string(),
            listing.item_name.clone(),
            listing.size.clone(),
            listing.stock.to_string(),
            listing.price.to_string(),
            listing.created_at.to_string(),
        ]);
    }

    table.write(out)
}
