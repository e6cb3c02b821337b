//! osint-bot: entry point. Parses the CLI, loads `.env`, runs the lookup bot.

use anyhow::Result;
use clap::Parser;
use telegram_bot::{load_config, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            osint_bot::run(config).await
        }
    }
}
