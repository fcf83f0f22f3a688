//! App config: Telegram connection, event log and media locations, log file. Loaded from env.

use anyhow::Result;
use chatlog_telegram::TelegramConfig;
use handlers::DEFAULT_MEDIA_DIR;
use std::env;
use std::path::PathBuf;
use storage::DEFAULT_HISTORY_FILE;

pub const DEFAULT_LOG_FILE: &str = "logs/chatlog.log";

/// Where events and media are written. Does not need a bot token.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// CHAT_HISTORY_FILE
    pub history_file: PathBuf,
    /// MEDIA_DIR
    pub media_dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            history_file: env::var("CHAT_HISTORY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_FILE)),
            media_dir: env::var("MEDIA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MEDIA_DIR)),
        }
    }

    /// Replaces the env values with any CLI-provided paths.
    pub fn with_overrides(mut self, history_file: Option<PathBuf>, media_dir: Option<PathBuf>) -> Self {
        if let Some(history_file) = history_file {
            self.history_file = history_file;
        }
        if let Some(media_dir) = media_dir {
            self.media_dir = media_dir;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub storage: StorageConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment. `token` overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::load(token)?,
            storage: StorageConfig::from_env(),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is empty");
        }
        Ok(())
    }
}
