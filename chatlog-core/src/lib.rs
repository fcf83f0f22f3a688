//! # chatlog-core
//!
//! Core types and traits for the chat-logging bot: [`Bot`], [`Handler`], message, media and user types,
//! and tracing initialization. Transport-agnostic; used by chatlog-telegram, handler-chain and handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, RemoteFile};
pub use error::{ChatlogError, Result};
pub use logger::{init_tracing, open_log_file};
pub use types::{
    Chat, Handler, HandlerResponse, MediaAttachment, MediaKind, Message, MessageKind,
    ToCoreMessage, ToCoreUser, User, UNKNOWN_USER,
};
