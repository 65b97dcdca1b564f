use academeet_accounts::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Register(args) => cli::register::run(args).await,
        Command::CheckUsername(args) => cli::username::run(args).await,
    }
}
