//! Core types: user, chat, message kinds, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier used when a sender has neither handle, display name nor id.
pub const UNKNOWN_USER: &str = "unknown_user";

/// User identity (id, username, names). An `id` of 0 means the transport did not supply one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Best available identifier: handle, then display name, then `user_<id>`, then [`UNKNOWN_USER`].
    /// Empty strings count as absent.
    pub fn identifier(&self) -> String {
        if let Some(username) = self.username.as_deref().filter(|s| !s.is_empty()) {
            return username.to_string();
        }
        if let Some(first_name) = self.first_name.as_deref().filter(|s| !s.is_empty()) {
            return first_name.to_string();
        }
        if self.id != 0 {
            return format!("user_{}", self.id);
        }
        UNKNOWN_USER.to_string()
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Media categories the bot saves to disk. Each has its own directory under the media root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Audio,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Photo, MediaKind::Video, MediaKind::Audio];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to a file held by the transport; resolved through [`crate::Bot::get_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub file_id: String,
}

impl MediaAttachment {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

/// What the user sent. Closed set: transports drop anything else before it reaches the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Bot command without the leading `/` or `@botname` suffix, e.g. `start`.
    Command { name: String, args: String },
    Text(String),
    Photo(MediaAttachment),
    Video(MediaAttachment),
    Audio(MediaAttachment),
}

impl MessageKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Command { .. } => "command",
            MessageKind::Text(_) => "text",
            MessageKind::Photo(_) => "photo",
            MessageKind::Video(_) => "video",
            MessageKind::Audio(_) => "audio",
        }
    }
}

/// A single inbound event with sender, chat, payload and optional media caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: MessageKind,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the reply text that was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`]. `None` for kinds the bot does not handle.
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Option<Message>;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
