//! Canned reply texts.

use chatlog_core::MediaKind;
use storage::EventRecord;

/// The only command the bot answers.
pub const START_COMMAND: &str = "start";

/// Text (compared case-insensitively) that asks for the full chat history.
pub const HISTORY_KEYWORD: &str = "read_chat_history";

pub const GREETING: &str = "👋 Hello! I'm your chat bot. I can:\n\
1. Store all messages and media\n\
2. Show chat history (type 'read_chat_history')\n\
3. Handle text, photos, videos, and audio";

pub const NO_HISTORY: &str = "No chat history found.";

pub const HISTORY_HEADER: &str = "Chat History:\n";

pub fn is_history_request(text: &str) -> bool {
    text.to_lowercase() == HISTORY_KEYWORD
}

pub fn text_reply(content: &str) -> String {
    format!("Received your text message: {}", content)
}

pub fn media_reply(kind: MediaKind, filename: &str) -> String {
    format!("Received your {}! Saved as {}", kind, filename)
}

/// `Chat History:\n` followed by the records as pretty JSON, or [`NO_HISTORY`] for an empty log.
pub fn history_reply(records: &[EventRecord]) -> Result<String, serde_json::Error> {
    if records.is_empty() {
        return Ok(NO_HISTORY.to_string());
    }
    Ok(format!(
        "{}{}",
        HISTORY_HEADER,
        serde_json::to_string_pretty(records)?
    ))
}
