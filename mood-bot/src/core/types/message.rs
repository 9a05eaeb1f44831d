//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};
use crate::core::bot::MessageId;

/// A single inbound message with user, chat and text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty when the message carries no text.
    pub content: String,
    /// `"text"` for text messages, otherwise the transport's media kind.
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn has_text(&self) -> bool {
        self.message_type == "text" && !self.content.is_empty()
    }
}
