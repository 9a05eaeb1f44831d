//! Bot abstraction for the outbound calls the handlers make.
//!
//! [`Bot`] is transport-agnostic; `TelegramBotAdapter` implements it via teloxide and tests
//! substitute a recording mock. Every call is a remote call that can fail with [`DbotError::Bot`].
//!
//! [`DbotError::Bot`]: crate::core::DbotError::Bot

use async_trait::async_trait;

use super::error::Result;
use super::types::Message;

/// Chat identifier (Telegram chat ids are signed 64-bit).
pub type ChatId = i64;

/// Message identifier within a chat.
pub type MessageId = i32;

/// Outbound operations consumed by handlers.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat and returns the new message id.
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<MessageId>;

    /// Sends a reply in the chat of `message` and returns the new message id.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<MessageId>;

    /// Deletes a message from a chat.
    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;

    /// Pins a message in a chat.
    async fn pin_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;

    /// Resolves a public username (`name` or `@name`) to its chat id.
    async fn resolve_username(&self, username: &str) -> Result<ChatId>;
}
