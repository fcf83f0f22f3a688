//! # chatlog-cli
//!
//! CLI foundation for the chat-logging bot: argument parsing, config loading, bootstrap and assembly.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_handler_chain, prompt_token, render_history, run_bot};
pub use cli::{Cli, Commands};
pub use config::{BotConfig, StorageConfig, DEFAULT_LOG_FILE};
