//! # Handler chain
//!
//! Runs a sequence of handlers for each message: every `before` in order (any `false` stops the chain),
//! then `handle` until one returns Stop or Reply, then every `after` in reverse order with the final response.

use chatlog_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers sharing one message. Cheap to clone (handlers are `Arc`).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (before/handle in order, after in reverse).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs the three phases. Returns the first Stop or Reply, or Continue when no handler ended the chain.
    /// A `before` returning false yields Stop without running handle or after.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id, kind = message.kind.name()))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(message_id = %message.id, "step: handler_chain started");

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(message).await? {
                info!(
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(handler = %handler_name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(handler = %handler_name, "step: handler chain stopped by handler");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        let (response_type, reply_len) = match &final_response {
            HandlerResponse::Continue => ("Continue", None),
            HandlerResponse::Stop => ("Stop", None),
            HandlerResponse::Ignore => ("Ignore", None),
            HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
        };
        info!(
            message_id = %message.id,
            response_type = %response_type,
            reply_len = ?reply_len,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
