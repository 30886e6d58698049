use std::io::Write;

use clap::{Args, Subcommand};
use grailify::{fixtures::parse_price, prices::Price};
use grailify_app::context::AppContext;

use super::output::write_line;

#[derive(Debug, Args)]
pub(crate) struct SaleCommand {
    #[command(subcommand)]
    command: SaleSubcommand,
}

#[derive(Debug, Subcommand)]
enum SaleSubcommand {
    /// Record a trade of an item and bump its popularity
    Record(RecordSaleArgs),
}

#[derive(Debug, Args)]
struct RecordSaleArgs {
    item: i64,

    /// Sale price, e.g. "145.00 USD"; defaults to the current display price
    #[arg(long, value_parser = parse_sale_price)]
    price: Option<Price>,
}

fn parse_sale_price(value: &str) -> Result<Price, String> {
    parse_price(value)
        .map(|(price, _currency)| price)
        .map_err(|error| error.to_string())
}

pub(crate) async fn run(
    command: SaleCommand,
    ctx: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        SaleSubcommand::Record(args) => record(args, ctx, out).await,
    }
}

async fn record(args: RecordSaleArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let event = ctx
        .listings
        .record_sale(args.item.into(), args.price)
        .await
        .map_err(|error| format!("failed to record sale: {error}"))?;

    write_line(out, &format!("event_id: {}", event.id))?;
    write_line(out, &format!("price: {}", event.price))?;
    write_line(out, &format!("recorded_at: {}", event.recorded_at))
}
