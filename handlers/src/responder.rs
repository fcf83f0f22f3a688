//! Shared by the per-kind handlers: writes records to the event log and sends replies.

use chatlog_core::{Bot, ChatlogError, HandlerResponse, Message, Result};
use std::sync::Arc;
use storage::{EventLog, EventRecord};
use tracing::{error, info};

#[derive(Clone)]
pub struct Responder {
    bot: Arc<dyn Bot>,
    log: Arc<dyn EventLog>,
}

impl Responder {
    pub fn new(bot: Arc<dyn Bot>, log: Arc<dyn EventLog>) -> Self {
        Self { bot, log }
    }

    pub fn bot(&self) -> &dyn Bot {
        self.bot.as_ref()
    }

    /// Appends `record` to the event log.
    pub async fn record(&self, record: EventRecord) -> Result<()> {
        let chat_id = record.chat_id;
        self.log.append(record).await.map_err(|e| {
            error!(error = %e, chat_id = chat_id, "Failed to append event record");
            ChatlogError::Storage(e.to_string())
        })
    }

    /// Full event log as it is now.
    pub async fn history(&self) -> Result<Vec<EventRecord>> {
        self.log.read_all().await.map_err(|e| {
            error!(error = %e, "Failed to read event log");
            ChatlogError::Storage(e.to_string())
        })
    }

    /// Sends `text` as a reply to `message`, then logs it as a bot record.
    pub async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        info!(
            chat_id = message.chat.id,
            reply_len = text.len(),
            "step: reply sent"
        );
        self.record(EventRecord::bot_reply(message.chat.id, text.clone()))
            .await?;
        Ok(HandlerResponse::Reply(text))
    }
}
