//! Bot abstraction for replying and fetching attachments.
//!
//! [`Bot`] is transport-agnostic; chatlog-telegram implements it via teloxide.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;
use std::path::Path;

/// A transport file resolved from an attachment reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub file_id: String,
    /// Canonical path on the transport side, e.g. `photos/file_12.jpg`. Its extension names the saved file.
    pub path: String,
    pub size: u64,
}

impl RemoteFile {
    /// Extension of [`RemoteFile::path`] including the leading dot, or an empty string.
    pub fn extension(&self) -> String {
        Path::new(&self.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }
}

/// Abstraction for sending messages and downloading attachments. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Resolves an attachment reference to a downloadable file.
    async fn get_file(&self, file_id: &str) -> Result<RemoteFile>;
    /// Downloads `file` to `destination`, replacing any existing file.
    async fn download_file(&self, file: &RemoteFile, destination: &Path) -> Result<()>;
}
