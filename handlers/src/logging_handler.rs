//! Traces every event in before() and the final response in after(); never stops the chain.

use async_trait::async_trait;
use chatlog_core::{Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let content = match &message.kind {
            MessageKind::Command { name, args } if args.is_empty() => format!("/{}", name),
            MessageKind::Command { name, args } => format!("/{} {}", name, args),
            MessageKind::Text(text) => text.clone(),
            MessageKind::Photo(a) | MessageKind::Video(a) | MessageKind::Audio(a) => {
                format!("file_id={}", a.file_id)
            }
        };
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.identifier(),
            kind = message.kind.name(),
            message_content = %content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
