use std::io;

use clap::{Parser, Subcommand};
use grailify_app::{
    config::AppConfig,
    context::AppContext,
    observability,
};

mod catalog;
mod db;
mod listing;
mod order;
mod output;
mod sale;
mod user;

#[derive(Debug, Parser)]
#[command(name = "grailify-app", about = "Grailify marketplace CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Catalog(catalog::CatalogCommand),
    Sale(sale::SaleCommand),
    Listing(listing::ListingCommand),
    Order(order::OrderCommand),
    User(user::UserCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let mut out = io::stdout().lock();

        match self.command {
            Commands::Db(command) => db::run(command, &self.config.database).await,
            Commands::Catalog(command) => {
                catalog::run(command, &context(&self.config).await?, &mut out).await
            }
            Commands::Sale(command) => {
                sale::run(command, &context(&self.config).await?, &mut out).await
            }
            Commands::Listing(command) => {
                listing::run(command, &context(&self.config).await?, &mut out).await
            }
            Commands::Order(command) => {
                order::run(command, &context(&self.config).await?, &mut out).await
            }
            Commands::User(command) => {
                user::run(command, &context(&self.config).await?, &mut out).await
            }
        }
    }
}

async fn context(config: &AppConfig) -> Result<AppContext, String> {
    AppContext::from_config(config)
        .await
        .map_err(|error| format!("failed to start: {error}"))
}
