//! Free-text replies from the canned response table.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::ledger::SharedLedger;
use crate::mention::addressed_text;
use crate::responses::classify;

/// Answers text addressed to the bot (any private text, or a group message that @mentions it)
/// with [`classify`], and records the reply.
pub struct ResponseHandler {
    bot: Arc<dyn Bot>,
    ledger: SharedLedger,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl ResponseHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        ledger: SharedLedger,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            ledger,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for ResponseHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        // Commands addressed to other bots reach here unparsed.
        if !message.has_text() || message.content.trim_start().starts_with('/') {
            return Ok(HandlerResponse::Ignore);
        }

        let bot_username = self.bot_username.read().await.clone();
        let Some(text) = addressed_text(message, bot_username.as_deref()) else {
            debug!(chat_kind = message.chat.kind.as_str(), "Message not addressed to bot");
            return Ok(HandlerResponse::Ignore);
        };

        let (intent, reply) = classify(&text);
        info!(intent = %intent, response = %reply, "Bot response");

        let id = self.bot.reply_to(message, reply).await?;
        self.ledger.lock().await.record(id).await?;
        Ok(HandlerResponse::Reply(reply.to_string()))
    }
}
