//! Plain text messages, including the history keyword.

use chatlog_core::{ChatlogError, HandlerResponse, Message, Result};
use storage::EventRecord;
use tracing::{info, instrument};

use crate::reply::{history_reply, is_history_request, text_reply};
use crate::responder::Responder;

#[derive(Clone)]
pub struct TextHandler {
    responder: Responder,
}

impl TextHandler {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }

    /// A history request replies with the log as it was before the request itself is recorded.
    #[instrument(skip(self, message, text), fields(chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        let reply = if is_history_request(text) {
            let history = self.responder.history().await?;
            info!(records = history.len(), "step: chat history requested");
            history_reply(&history).map_err(|e| ChatlogError::Storage(e.to_string()))?
        } else {
            text_reply(text)
        };

        self.responder
            .record(EventRecord::user_text(
                message.user.identifier(),
                message.chat.id,
                text.to_string(),
            ))
            .await?;

        self.responder.reply(message, reply).await
    }
}
