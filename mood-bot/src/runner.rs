//! Entry point wiring config, logging, components and the polling loop.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::run_repl;

/// Validates config, initializes logging, builds components and the handler chain, then polls
/// until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        message_log = %config.message_log_file,
        broadcast_chat = ?config.group_chat_id,
        "Starting bot..."
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(&components, config.command_settings());

    run_repl(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
    )
    .await
}
