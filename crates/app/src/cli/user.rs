use std::io::Write;

use clap::{Args, Subcommand};
use grailify_app::{context::AppContext, domain::users::data::NewUser};

use super::output::write_line;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    Create(CreateUserArgs),
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    #[arg(long)]
    username: String,

    #[arg(long)]
    email: String,
}

pub(crate) async fn run(
    command: UserCommand,
    ctx: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    match command.command {
        UserSubcommand::Create(args) => create(args, ctx, out).await,
    }
}

async fn create(args: CreateUserArgs, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let user = ctx
        .users
        .create_user(NewUser {
            username: args.username,
            email: args.email,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    write_line(out, &format!("user_id: {}", user.id))?;
    write_line(out, &format!("username: {}", user.username))
}
