//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use chatlog_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Each supported message is converted to core::Message and handled in its own spawned task;
/// unsupported messages and commands for other bots are dropped. A failing chain is logged and does not stop the REPL.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            info!(
                username = %me.user.username.as_deref().unwrap_or("-"),
                "Bot is running"
            );
            me.user.username.clone()
        }
        Err(e) => {
            error!(error = %e, "get_me failed, starting REPL anyway");
            None
        }
    };

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let bot_username = bot_username.clone();

        async move {
            let converted = TelegramMessageWrapper::new(&msg)
                .with_bot_username(bot_username.as_deref())
                .to_core();
            let Some(core_msg) = converted else {
                debug!(chat_id = msg.chat.id.0, "Ignoring unsupported message");
                return Ok(());
            };

            tokio::spawn(async move {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: processing message (handler chain started)"
                );
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
