//! # chatlog-telegram
//!
//! Telegram transport layer: adapters to core types, [`chatlog_core::Bot`] implementation (replies and
//! file downloads), minimal config, REPL runner. No persistence or routing logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{leading_command, ParsedCommand, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{split_message, TelegramBotAdapter, TELEGRAM_MESSAGE_LIMIT};
pub use config::TelegramConfig;
pub use runner::run_repl;
