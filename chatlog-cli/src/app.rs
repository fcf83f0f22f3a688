//! Bootstrap and assembly: builds the handler chain and runs the bot.

use anyhow::{Context, Result};
use chatlog_core::{init_tracing, Bot};
use chatlog_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use handlers::{history_reply, EventRouter, LoggingHandler, MediaStore};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use storage::{EventLog, JsonFileLog};
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Logging first, then the router.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    log: Arc<dyn EventLog>,
    media_store: MediaStore,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(EventRouter::new(bot, log, media_store)))
}

/// Main entry: validate config, init logging, create media dirs, build the chain, run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    init_tracing(Path::new(&config.log_file))?;

    let media_store = MediaStore::new(&config.storage.media_dir);
    media_store
        .ensure_dirs()
        .await
        .with_context(|| format!("Create media directories under {}", media_store.root().display()))?;

    info!(
        history_file = %config.storage.history_file.display(),
        media_dir = %media_store.root().display(),
        "Initializing bot"
    );

    let log: Arc<dyn EventLog> = Arc::new(JsonFileLog::new(&config.storage.history_file));
    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(bot, log, media_store);

    run_repl(teloxide_bot, handler_chain).await
}

/// The logged history as the bot would show it: header plus pretty JSON, or "No chat history found.".
pub async fn render_history(log: &dyn EventLog) -> Result<String> {
    let records = log.read_all().await.context("Read chat history")?;
    Ok(history_reply(&records)?)
}

/// Asks for the bot token on stdin.
pub fn prompt_token() -> Result<String> {
    print!("token: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let token = line.trim().to_string();
    if token.is_empty() {
        anyhow::bail!("No token entered");
    }
    Ok(token)
}
