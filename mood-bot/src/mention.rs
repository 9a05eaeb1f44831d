//! @-mention detection for group chats.
//!
//! The bot handle may be configured with or without the leading `@`; both forms match the same
//! `@handle` substring in message text.

use crate::core::Message;

/// Returns the handle in `@name` form.
pub fn mention_of(bot_username: &str) -> String {
    let name = bot_username.trim().trim_start_matches('@');
    format!("@{}", name)
}

/// Returns true if `text` contains an @mention of the bot.
#[inline]
pub fn is_bot_mentioned(text: &str, bot_username: &str) -> bool {
    text.contains(&mention_of(bot_username))
}

/// Strips every @mention of the bot from `text` and trims the rest.
#[inline]
pub fn extract_question(text: &str, bot_username: &str) -> String {
    text.replace(&mention_of(bot_username), "").trim().to_string()
}

/// Text the bot should answer, if the message is addressed to it.
///
/// - Group or supergroup: only when the bot is @mentioned; the mention is stripped.
///   Without a known `bot_username` group messages are never addressed to the bot.
/// - Any other chat: the full content.
pub fn addressed_text(message: &Message, bot_username: Option<&str>) -> Option<String> {
    if !message.chat.kind.is_group() {
        return Some(message.content.clone());
    }
    let username = bot_username?;
    if is_bot_mentioned(&message.content, username) {
        Some(extract_question(&message.content, username))
    } else {
        None
    }
}
