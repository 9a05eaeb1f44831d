//! Mock implementation of [`mood_bot::Bot`] for integration tests.
//!
//! Records every call in order and hands out increasing message ids, so tests can assert on the
//! exact sequence of remote calls without hitting Telegram. Individual operations can be made to
//! fail.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use mood_bot::{Bot, ChatId, DbotError, Message, MessageId, Result};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    Send { chat_id: ChatId, text: String, id: MessageId },
    Reply { chat_id: ChatId, text: String, id: MessageId },
    Delete { chat_id: ChatId, message_id: MessageId },
    Pin { chat_id: ChatId, message_id: MessageId },
    Resolve { username: String },
}

#[derive(Default)]
struct State {
    calls: Vec<BotCall>,
    next_id: MessageId,
}

/// Recording bot. Ids start at 100.
#[derive(Default)]
pub struct MockBot {
    state: Mutex<State>,
    pub fail_send: bool,
    pub fail_pin: bool,
    pub fail_resolve: bool,
    pub fail_delete: HashSet<MessageId>,
    /// Chat id returned by `resolve_username`.
    pub resolved_chat: ChatId,
}

impl MockBot {
    pub fn new() -> Self {
        Self {
            resolved_chat: 777,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Texts of all replies, in order.
    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Reply { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn deleted(&self) -> Vec<MessageId> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Delete { message_id, .. } => Some(message_id),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: impl FnOnce(MessageId) -> BotCall) -> MessageId {
        let mut state = self.state.lock().unwrap();
        let id = 100 + state.next_id;
        state.next_id += 1;
        state.calls.push(call(id));
        id
    }

    fn push_call(&self, call: BotCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<MessageId> {
        if self.fail_send {
            return Err(DbotError::Bot("chat not found".to_string()));
        }
        Ok(self.push(|id| BotCall::Send {
            chat_id,
            text: text.to_string(),
            id,
        }))
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<MessageId> {
        Ok(self.push(|id| BotCall::Reply {
            chat_id: message.chat.id,
            text: text.to_string(),
            id,
        }))
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.push_call(BotCall::Delete { chat_id, message_id });
        if self.fail_delete.contains(&message_id) {
            return Err(DbotError::Bot("message to delete not found".to_string()));
        }
        Ok(())
    }

    async fn pin_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        if self.fail_pin {
            return Err(DbotError::Bot("not enough rights to pin".to_string()));
        }
        self.push_call(BotCall::Pin { chat_id, message_id });
        Ok(())
    }

    async fn resolve_username(&self, username: &str) -> Result<ChatId> {
        self.push_call(BotCall::Resolve {
            username: username.to_string(),
        });
        if self.fail_resolve {
            return Err(DbotError::Bot("chat not found".to_string()));
        }
        Ok(self.resolved_chat)
    }
}
