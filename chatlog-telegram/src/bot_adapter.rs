//! Wraps teloxide::Bot and implements [`chatlog_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use chatlog_core::{Bot as CoreBot, Chat, ChatlogError, Message, RemoteFile, Result};
use std::path::Path;
use teloxide::net::Download;
use teloxide::{prelude::*, types::ChatId, types::FileId};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Longest text Telegram accepts in one message, in UTF-16 code units.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Thin wrapper around teloxide::Bot that implements chatlog-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    /// Long texts (e.g. chat history) go out as several messages, in order.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let pieces = split_message(text, TELEGRAM_MESSAGE_LIMIT);
        if pieces.len() > 1 {
            debug!(chat_id = chat.id, pieces = pieces.len(), "Splitting long message");
        }
        for piece in pieces {
            self.bot
                .send_message(ChatId(chat.id), piece.to_string())
                .await
                .map_err(|e| ChatlogError::Bot(e.to_string()))?;
        }
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn get_file(&self, file_id: &str) -> Result<RemoteFile> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| ChatlogError::Media(format!("get_file {}: {}", file_id, e)))?;
        debug!(file_id = %file_id, path = %file.path, "Resolved file");
        Ok(RemoteFile {
            file_id: file_id.to_string(),
            path: file.path,
            size: u64::from(file.meta.size),
        })
    }

    /// A failed download leaves nothing behind at `destination`.
    async fn download_file(&self, file: &RemoteFile, destination: &Path) -> Result<()> {
        let mut dst = tokio::fs::File::create(destination).await?;
        if let Err(e) = self.bot.download_file(&file.path, &mut dst).await {
            drop(dst);
            if let Err(rm) = tokio::fs::remove_file(destination).await {
                warn!(path = %destination.display(), error = %rm, "Could not remove partial download");
            }
            return Err(ChatlogError::Media(format!("download {}: {}", file.path, e)));
        }
        dst.flush().await?;
        Ok(())
    }
}

/// Splits `text` into pieces of at most `limit` UTF-16 units, cutting on char boundaries.
/// A piece ends after its last newline when there is one, so JSON lines stay whole.
pub fn split_message(text: &str, limit: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let mut units = 0;
        let mut end = rest.len();
        let mut after_newline = None;
        for (idx, ch) in rest.char_indices() {
            units += ch.len_utf16();
            if units > limit {
                end = after_newline.unwrap_or(idx);
                break;
            }
            if ch == '\n' {
                after_newline = Some(idx + 1);
            }
        }
        // Always make progress, even when one char exceeds the limit.
        if end == 0 {
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (piece, tail) = rest.split_at(end);
        pieces.push(piece);
        rest = tail;
    }
    pieces
}
