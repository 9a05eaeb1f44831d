//! BotConfig: BaseConfig plus the values the commands and the ledger need.

use anyhow::{bail, Context, Result};
use std::env;

use super::BaseConfig;
use crate::core::ChatId;
use crate::handlers::CommandSettings;

/// Default path of the sent-message timestamp log.
pub const DEFAULT_MESSAGE_LOG_FILE: &str = "message_log.json";

/// Bot config. Use BotConfig::load() for env-based loading, then validate().
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    /// BOT_USERNAME; filled from getMe at startup when unset.
    pub bot_username: Option<String>,
    /// GROUP_CHAT_ID, target of /broadcast.
    pub group_chat_id: Option<ChatId>,
    /// WEBSITE_URL, returned by /website.
    pub website_url: Option<String>,
    /// MESSAGE_LOG_FILE
    pub message_log_file: String,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let group_chat_id = non_empty_var("GROUP_CHAT_ID")
            .map(|s| {
                s.parse::<ChatId>()
                    .with_context(|| format!("GROUP_CHAT_ID is not a chat id: {}", s))
            })
            .transpose()?;

        Ok(Self {
            base,
            bot_username: non_empty_var("BOT_USERNAME"),
            group_chat_id,
            website_url: non_empty_var("WEBSITE_URL"),
            message_log_file: non_empty_var("MESSAGE_LOG_FILE")
                .unwrap_or_else(|| DEFAULT_MESSAGE_LOG_FILE.to_string()),
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if let Some(ref url) = self.website_url {
            if reqwest::Url::parse(url).is_err() {
                bail!("WEBSITE_URL is set but not a valid URL: {}", url);
            }
        }
        Ok(())
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }

    /// Settings handed to the command handler.
    pub fn command_settings(&self) -> CommandSettings {
        CommandSettings {
            group_chat_id: self.group_chat_id,
            website_url: self.website_url.clone(),
        }
    }
}
