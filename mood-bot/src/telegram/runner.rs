//! Polling runner: converts teloxide messages to core [`Message`](crate::core::Message) and drives the
//! [`HandlerChain`]. teloxide delivers the updates of one chat in order; each update's chain run
//! is awaited before the next update of that chat is handled.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// When `bot_username` is still empty, fills it from `getMe` first so group mentions and
/// `/cmd@bot` suffixes can be recognised.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    if bot_username.read().await.is_none() {
        match bot.get_me().await {
            Ok(me) => {
                if let Some(username) = &me.user.username {
                    *bot_username.write().await = Some(username.clone());
                    info!(username = %username, "Bot username set from getMe");
                }
            }
            Err(e) => warn!(error = %e, "getMe failed; group mentions will be ignored"),
        }
    }

    info!("Polling...");
    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Handler chain failed"
                );
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
