//! Event router: picks exactly one handler per message kind.

use async_trait::async_trait;
use chatlog_core::{Bot, Handler, HandlerResponse, MediaKind, Message, MessageKind, Result};
use std::sync::Arc;
use storage::EventLog;
use tracing::{info, instrument};

use crate::command_handler::CommandHandler;
use crate::media_handler::MediaHandler;
use crate::media_store::MediaStore;
use crate::responder::Responder;
use crate::text_handler::TextHandler;

#[derive(Clone)]
pub struct EventRouter {
    command: CommandHandler,
    text: TextHandler,
    media: MediaHandler,
}

impl EventRouter {
    pub fn new(bot: Arc<dyn Bot>, log: Arc<dyn EventLog>, media_store: MediaStore) -> Self {
        let responder = Responder::new(bot, log);
        Self {
            command: CommandHandler::new(responder.clone()),
            text: TextHandler::new(responder.clone()),
            media: MediaHandler::new(responder, media_store),
        }
    }
}

#[async_trait]
impl Handler for EventRouter {
    #[instrument(skip(self, message), fields(user_id = message.user.id, kind = message.kind.name()))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(chat_id = message.chat.id, "step: routing event");
        match &message.kind {
            MessageKind::Command { name, .. } => self.command.handle(message, name).await,
            MessageKind::Text(text) => self.text.handle(message, text).await,
            MessageKind::Photo(attachment) => {
                self.media
                    .handle(message, MediaKind::Photo, attachment)
                    .await
            }
            MessageKind::Video(attachment) => {
                self.media
                    .handle(message, MediaKind::Video, attachment)
                    .await
            }
            MessageKind::Audio(attachment) => {
                self.media
                    .handle(message, MediaKind::Audio, attachment)
                    .await
            }
        }
    }
}
