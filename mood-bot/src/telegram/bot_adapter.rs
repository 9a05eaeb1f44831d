//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId as TgChatId, MessageId as TgMessageId, Recipient};

use crate::core::{Bot as CoreBot, ChatId, DbotError, Message, MessageId, Result};

fn bot_error(e: teloxide::RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<MessageId> {
        let sent = self
            .bot
            .send_message(TgChatId(chat_id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(sent.id.0)
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<MessageId> {
        self.send_message(message.chat.id, text).await
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.bot
            .delete_message(TgChatId(chat_id), TgMessageId(message_id))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn pin_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.bot
            .pin_chat_message(TgChatId(chat_id), TgMessageId(message_id))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn resolve_username(&self, username: &str) -> Result<ChatId> {
        let name = username.trim().trim_start_matches('@');
        if name.is_empty() {
            return Err(DbotError::Bot("empty username".to_string()));
        }
        let chat = self
            .bot
            .get_chat(Recipient::ChannelUsername(format!("@{}", name)))
            .await
            .map_err(bot_error)?;
        Ok(chat.id.0)
    }
}
