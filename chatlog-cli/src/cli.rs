//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatlog")]
#[command(about = "Telegram bot that logs every message and saves received media", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override). Prompts for the token when neither --token nor BOT_TOKEN is set.
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Event log file (overrides CHAT_HISTORY_FILE).
        #[arg(long)]
        history_file: Option<PathBuf>,
        /// Media root holding photo/, video/ and audio/ (overrides MEDIA_DIR).
        #[arg(long)]
        media_dir: Option<PathBuf>,
    },
    /// Print the logged chat history.
    History {
        /// Event log file (overrides CHAT_HISTORY_FILE).
        #[arg(long)]
        history_file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "chatlog",
            "run",
            "--token",
            "abc",
            "--history-file",
            "/tmp/h.json",
            "--media-dir",
            "/tmp/media",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                token,
                history_file,
                media_dir,
            } => {
                assert_eq!(token.as_deref(), Some("abc"));
                assert_eq!(history_file, Some(PathBuf::from("/tmp/h.json")));
                assert_eq!(media_dir, Some(PathBuf::from("/tmp/media")));
            }
            Commands::History { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_history() {
        let cli = Cli::try_parse_from(["chatlog", "history"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::History { history_file: None }
        ));
    }
}
