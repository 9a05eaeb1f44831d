//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot;
use crate::handlers::{CommandHandler, CommandSettings, LoggingHandler, ResponseHandler};
use crate::ledger::{MessageLedger, SharedLedger};
use crate::sentiment::{SentimentScorer, VaderScorer};
use crate::telegram::TelegramBotAdapter;

/// Dependencies shared by the handlers; produced by [`build_bot_components`].
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub ledger: SharedLedger,
    pub scorer: Arc<dyn SentimentScorer>,
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Builds the teloxide client, opens the ledger, and wires the default scorer.
///
/// Failing to open the message log is fatal.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = teloxide::Bot::new(config.bot_token());
        match config.telegram_api_url() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    };

    let ledger = MessageLedger::open(&config.message_log_file)
        .await
        .with_context(|| format!("Failed to open message log {}", config.message_log_file))?
        .into_shared();
    info!(path = %config.message_log_file, "Message ledger ready");

    Ok(BotComponents {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        teloxide_bot,
        ledger,
        scorer: Arc::new(VaderScorer::new()),
        bot_username: Arc::new(RwLock::new(config.bot_username.clone())),
    })
}

/// Chain: logging → commands → free-text replies.
pub fn build_handler_chain(components: &BotComponents, settings: CommandSettings) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            components.bot.clone(),
            components.ledger.clone(),
            components.scorer.clone(),
            settings,
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(ResponseHandler::new(
            components.bot.clone(),
            components.ledger.clone(),
            components.bot_username.clone(),
        )))
}
