//! Mock implementation of [`chatlog_core::Bot`] for integration tests.
//!
//! Records replies so tests can assert on them without hitting Telegram, and serves in-memory files.

use async_trait::async_trait;
use chatlog_core::{Bot, Chat, ChatlogError, Message, RemoteFile, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockBot {
    replies: Mutex<Vec<(i64, String)>>,
    files: HashMap<String, (String, Vec<u8>)>,
}

impl MockBot {
    pub fn with_file(mut self, file_id: &str, path: &str, bytes: &[u8]) -> Self {
        self.files
            .insert(file_id.to_string(), (path.to_string(), bytes.to_vec()));
        self
    }

    /// `(chat_id, text)` of every message sent so far.
    pub fn replies(&self) -> Vec<(i64, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.replies
            .lock()
            .unwrap()
            .push((chat.id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn get_file(&self, file_id: &str) -> Result<RemoteFile> {
        let (path, bytes) = self
            .files
            .get(file_id)
            .ok_or_else(|| ChatlogError::Bot(format!("file not found: {}", file_id)))?;
        Ok(RemoteFile {
            file_id: file_id.to_string(),
            path: path.clone(),
            size: bytes.len() as u64,
        })
    }

    async fn download_file(&self, file: &RemoteFile, destination: &Path) -> Result<()> {
        let (_, bytes) = self
            .files
            .get(&file.file_id)
            .ok_or_else(|| ChatlogError::Bot(format!("file not found: {}", file.file_id)))?;
        std::fs::write(destination, bytes)?;
        Ok(())
    }
}
