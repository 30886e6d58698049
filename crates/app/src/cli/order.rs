use std::{
    io::Write,
    path::{Path, PathBuf},
};

use clap::{Args, Subcommand};
use grailify::prices::Price;
use grailify_app::{
    context::AppContext,
    domain::orders::data::{CartLine, Checkout},
};
use serde::Deserialize;

use super::output::{TableOutput, optional, write_json, write_line};

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Check out a cart file into a completed order
    Checkout(CheckoutArgs),

    /// One order with its items
    Show(ShowOrderArgs),

    /// A user's orders, newest first
    List(ListOrdersArgs),
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    #[arg(long)]
    user: i64,

    /// JSON cart: `{"lines": [{"item": 1, "listing": 2, "price": 8000}], "total": 8000}`
    #[arg(long)]
    cart: PathBuf,
}

#[derive(Debug, Args)]
struct ShowOrderArgs {
    #[arg(long)]
    user: i64,

    #[arg(long)]
    order: i64,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ListOrdersArgs {
    #[arg(long)]
    user: i64,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Client-held cart as written to disk.
#[derive(Debug, Deserialize)]
struct CartFile {
    lines: Vec<CartFileLine>,
    total: Price,
    #[serde(default)]
    shipping_address_id: Option<i64>,
    #[serde(default)]
    payment_method_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct CartFileLine {
    item: i64,
    #[serde(default)]
    listing: Option<i64>,
    price: Price,
}

impl From<CartFile> for Checkout {
    fn from(cart: CartFile) -> Self {
        Checkout {
            lines: cart
                .lines
                .into_iter()
                .map(|line| CartLine {
                    item: line.item.into(),
                    listing: line.listing.map(Into::into),
                    price: line.price,
                })
                .collect(),
            total: cart.total,
            shipping_address_id: cart.shipping_address_id,
            payment_method_id: cart.payment_method_id,
        }
    }
}

fn read_cart(path: &Path) -> Result<Checkout, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    let cart: CartFile = serde_json::from_str(&contents)
        .map_err(|error| format!("failed to parse {}: {error}", path.display()))?;

    Ok(cart.into())
}

pub(crate) async fn run(
    command: OrderCommand,
    ctx: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        OrderSubcommand::Checkout(args) => checkout(args, ctx, out).await,
        OrderSubcommand::Show(args) => show(args, ctx, out).await,
        OrderSubcommand::List(args) => list(args, ctx, out).await,
    }
}

async fn checkout(args: CheckoutArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let checkout = read_cart(&args.cart)?;

    let order = ctx
        .orders
        .create_order(args.user.into(), checkout)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    write_line(out, &format!("order_id: {order}"))
}

async fn show(args: ShowOrderArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let order = ctx
        .orders
        .get_order(args.user.into(), args.order.into())
        .await
        .map_err(|error| format!("failed to load order {}: {error}", args.order))?;

    if args.json {
        return write_json(out, &order);
    }

    write_line(out, &format!("order_id: {}", order.id))?;
    write_line(out, &format!("status: {}", order.status))?;
    write_line(out, &format!("total: {}", order.total))?;
    write_line(out, &format!("created_at: {}", order.created_at))?;

    let mut table = TableOutput::new(["Item", "Listing", "Qty", "Price"]).numeric(&[0, 1, 2, 3]);

    for item in &order.items {
        table.row([
            item.item_id.to_string(),
            optional(item.listing_id),
            item.quantity.to_string(),
            item.price_at_purchase.to_string(),
        ]);
    }

    table.write(out)
}

async fn list(args: ListOrdersArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let orders = ctx
        .orders
        .list_orders(args.user.into())
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if args.json {
        return write_json(out, &orders);
    }

    let mut table =
        TableOutput::new(["Order", "Status", "Items", "Total", "Placed"]).numeric(&[0, 2, 3]);

    for order in &orders {
        table.row([
            order.id.to_string(),
            order.status.to_string(),
            order.item_count.to_string(),
            order.total.to_string(),
            order.created_at.to_string(),
        ]);
    }

    table.write(out)
}
