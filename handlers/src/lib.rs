//! # Handlers for the chat-logging bot
//!
//! [`EventRouter`] dispatches each event to the command, text or media handler. Every handler logs the
//! user's event, sends a reply and logs the reply. [`MediaStore`] saves attachments under
//! `{media_dir}/{photo|video|audio}/`. [`LoggingHandler`] traces events at the head of the chain.

mod command_handler;
mod logging_handler;
mod media_handler;
mod media_store;
mod reply;
mod responder;
mod router;
mod text_handler;

#[cfg(test)]
mod test;

pub use command_handler::CommandHandler;
pub use logging_handler::LoggingHandler;
pub use media_handler::MediaHandler;
pub use media_store::{media_filename, MediaStore, SavedMedia, DEFAULT_MEDIA_DIR};
pub use reply::{
    history_reply, is_history_request, media_reply, text_reply, GREETING, HISTORY_HEADER,
    HISTORY_KEYWORD, NO_HISTORY, START_COMMAND,
};
pub use responder::Responder;
pub use router::EventRouter;
pub use text_handler::TextHandler;
