//! Bot commands. Only `/start` is answered; other commands are ignored without a record.

use chatlog_core::{HandlerResponse, Message, Result};
use storage::EventRecord;
use tracing::{debug, instrument};

use crate::reply::{GREETING, START_COMMAND};
use crate::responder::Responder;

#[derive(Clone)]
pub struct CommandHandler {
    responder: Responder,
}

impl CommandHandler {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message, name: &str) -> Result<HandlerResponse> {
        if name != START_COMMAND {
            debug!(command = %name, "Ignoring unsupported command");
            return Ok(HandlerResponse::Ignore);
        }

        self.responder
            .record(EventRecord::user_command(
                message.user.identifier(),
                message.chat.id,
                format!("/{}", START_COMMAND),
            ))
            .await?;

        self.responder.reply(message, GREETING.to_string()).await
    }
}
