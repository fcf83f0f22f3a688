//! chatlog CLI: run the Telegram bot or print the logged history. Config from env and optional CLI args.

use anyhow::Result;
use chatlog_cli::{prompt_token, render_history, run_bot, BotConfig, Cli, Commands, StorageConfig};
use clap::Parser;
use storage::JsonFileLog;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            history_file,
            media_dir,
        } => {
            let token = match token {
                Some(token) => Some(token),
                None if std::env::var("BOT_TOKEN").is_err() => Some(prompt_token()?),
                None => None,
            };
            let mut config = BotConfig::load(token)?;
            config.storage = config.storage.with_overrides(history_file, media_dir);
            run_bot(config).await
        }
        Commands::History { history_file } => {
            let storage = StorageConfig::from_env().with_overrides(history_file, None);
            let log = JsonFileLog::new(&storage.history_file);
            println!("{}", render_history(&log).await?);
            Ok(())
        }
    }
}
