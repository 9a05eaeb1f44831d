//! Bot configuration: BaseConfig (Telegram + log) + command and ledger settings.

mod base;
mod bot_config;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::{BotConfig, DEFAULT_MESSAGE_LOG_FILE};
