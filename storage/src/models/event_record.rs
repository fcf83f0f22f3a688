//! Event record model for the chat history log.
//!
//! One JSON object per user event or bot reply. The kind is persisted under the `type` key.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Text,
    Photo,
    Video,
    Audio,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub chat_id: i64,
    /// Local time at record creation.
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Media path relative to the media root, e.g. `./photo/20240102_030405.jpg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl EventRecord {
    fn now(kind: RecordKind, sender: Sender, username: Option<String>, chat_id: i64) -> Self {
        Self {
            kind,
            sender,
            username,
            chat_id,
            timestamp: Local::now().naive_local(),
            content: None,
            file_path: None,
            caption: None,
        }
    }

    /// A text message sent by a user.
    pub fn user_text(username: String, chat_id: i64, content: String) -> Self {
        Self {
            content: Some(content),
            ..Self::now(RecordKind::Text, Sender::User, Some(username), chat_id)
        }
    }

    /// A bot command sent by a user; `content` is the command as typed, e.g. `/start`.
    pub fn user_command(username: String, chat_id: i64, content: String) -> Self {
        Self {
            content: Some(content),
            ..Self::now(RecordKind::Command, Sender::User, Some(username), chat_id)
        }
    }

    /// A saved photo/video/audio sent by a user. A missing caption is stored as `""`.
    ///
    /// `kind` must be one of the media kinds.
    pub fn user_media(
        kind: RecordKind,
        username: String,
        chat_id: i64,
        file_path: String,
        caption: Option<String>,
    ) -> Self {
        debug_assert!(matches!(
            kind,
            RecordKind::Photo | RecordKind::Video | RecordKind::Audio
        ));
        Self {
            file_path: Some(file_path),
            caption: Some(caption.unwrap_or_default()),
            ..Self::now(kind, Sender::User, Some(username), chat_id)
        }
    }

    /// A reply sent by the bot.
    pub fn bot_reply(chat_id: i64, content: String) -> Self {
        Self {
            content: Some(content),
            ..Self::now(RecordKind::Text, Sender::Bot, None, chat_id)
        }
    }
}
