//! Slash-command handler.
//!
//! Every command replies in the chat it came from and records the reply in the ledger, except
//! `/clear` whose acknowledgement is left untracked. `/broadcast` records the broadcast message
//! itself. Remote-call failures of `/broadcast` and `/send` are reported inline and do not fail
//! the chain; a failed plain reply does.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::commands::{Command, CommandLine};
use crate::core::{
    Bot, ChatId, DbotError, Handler, HandlerError, HandlerResponse, Message, MessageId, Result,
};
use crate::ledger::SharedLedger;
use crate::sentiment::{Mood, SentimentScorer};

pub const START_REPLY: &str = "Hello there! Thanks for chatting with me!!!";
pub const HELP_REPLY: &str = "For help, you can follow our Discord channel!";
pub const CUSTOM_REPLY: &str = "Customize";
pub const CLEARED_REPLY: &str = "Chat cleared!";
pub const BROADCAST_OK_REPLY: &str = "Message broadcasted and pinned successfully!";
pub const SEND_OK_REPLY: &str = "Message sent!";
pub const WEBSITE_MISSING_REPLY: &str = "Website is not configured.";

/// Deployment values the commands need.
#[derive(Debug, Clone, Default)]
pub struct CommandSettings {
    /// Target of `/broadcast`.
    pub group_chat_id: Option<ChatId>,
    /// Link returned by `/website`.
    pub website_url: Option<String>,
}

/// Parses and runs slash commands; plain text passes through with Continue.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    ledger: SharedLedger,
    scorer: Arc<dyn SentimentScorer>,
    settings: CommandSettings,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        ledger: SharedLedger,
        scorer: Arc<dyn SentimentScorer>,
        settings: CommandSettings,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            ledger,
            scorer,
            settings,
            bot_username,
        }
    }

    /// Replies and tracks the reply in the ledger.
    async fn reply_and_record(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        let id = self.bot.reply_to(message, text).await?;
        self.ledger.lock().await.record(id).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }

    async fn run(&self, message: &Message, command: Command) -> Result<HandlerResponse> {
        match command {
            Command::Start => self.reply_and_record(message, START_REPLY).await,
            Command::Help => self.reply_and_record(message, HELP_REPLY).await,
            Command::Custom => self.reply_and_record(message, CUSTOM_REPLY).await,
            Command::Sentiment { text } => self.sentiment(message, &text).await,
            Command::Clear => self.clear(message).await,
            Command::Broadcast { text } => self.broadcast(message, &text).await,
            Command::Send { username, text } => self.send_dm(message, &username, &text).await,
            Command::Website => {
                let reply = match &self.settings.website_url {
                    Some(url) => format!("Visit our website: {}", url),
                    None => WEBSITE_MISSING_REPLY.to_string(),
                };
                self.reply_and_record(message, &reply).await
            }
        }
    }

    async fn sentiment(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        let scores = self.scorer.polarity_scores(text);
        let mood = Mood::from_compound(scores.compound);
        info!(mood = %mood, compound = scores.compound, "Scored sentiment");
        let reply = format!("Mood: {}\nScores: {}", mood, scores);
        self.reply_and_record(message, &reply).await
    }

    async fn clear(&self, message: &Message) -> Result<HandlerResponse> {
        let report = self
            .ledger
            .lock()
            .await
            .drain_and_delete(message.chat.id, self.bot.as_ref())
            .await;

        let reply = if report.all_deleted() {
            CLEARED_REPLY.to_string()
        } else {
            format!(
                "Chat cleared, but {} message(s) could not be deleted.",
                report.failed
            )
        };
        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }

    /// Sends `text` to the broadcast chat and pins it. Returns the broadcast message id.
    async fn send_and_pin(&self, text: &str) -> Result<MessageId> {
        let chat_id = self
            .settings
            .group_chat_id
            .ok_or_else(|| DbotError::Config("GROUP_CHAT_ID is not set".to_string()))?;
        let id = self.bot.send_message(chat_id, text).await?;
        self.bot.pin_message(chat_id, id).await?;
        Ok(id)
    }

    async fn broadcast(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        match self.send_and_pin(text).await {
            Ok(id) => {
                info!(message_id = id, "Broadcast sent and pinned");
                self.ledger.lock().await.record(id).await?;
                self.bot.reply_to(message, BROADCAST_OK_REPLY).await?;
                Ok(HandlerResponse::Reply(BROADCAST_OK_REPLY.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Failed to send broadcast message");
                self.reply_and_record(message, &format!("Failed to send message: {}", e))
                    .await
            }
        }
    }

    async fn send_dm(
        &self,
        message: &Message,
        username: &str,
        text: &str,
    ) -> Result<HandlerResponse> {
        let sent: Result<MessageId> = async {
            let chat_id = self.bot.resolve_username(username).await?;
            self.bot.send_message(chat_id, text).await
        }
        .await;

        match sent {
            Ok(id) => {
                info!(username = %username, message_id = id, "Direct message sent");
                self.reply_and_record(message, SEND_OK_REPLY).await
            }
            Err(e) => {
                error!(username = %username, error = %e, "Failed to send DM");
                self.reply_and_record(message, &format!("Failed to send message: {}", e))
                    .await
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.has_text() {
            return Ok(HandlerResponse::Continue);
        }
        let bot_username = self.bot_username.read().await.clone();
        let Some(line) = CommandLine::parse(&message.content, bot_username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };

        match Command::from_line(&line) {
            Ok(command) => {
                info!(user_id = message.user.id, command = command.name(), "Running command");
                self.run(message, command).await
            }
            Err(e @ HandlerError::Usage(_)) => self.reply_and_record(message, &e.to_string()).await,
            Err(e) => {
                info!(user_id = message.user.id, error = %e, "Ignoring command");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
