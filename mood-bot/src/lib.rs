//! # mood-bot
//!
//! Telegram bot that answers greetings from a canned response table, scores sentiment, broadcasts
//! and pins announcements, forwards direct messages, and can delete everything it has sent.
//!
//! Messages flow through a [`HandlerChain`] (logging → commands → free-text replies). Every message
//! the bot sends is tracked in the [`MessageLedger`], which `/clear` drains.

pub mod chain;
pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod ledger;
pub mod mention;
pub mod responses;
pub mod runner;
pub mod sentiment;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, Bot, Chat, ChatId, ChatKind, DbotError, Handler, HandlerError, HandlerResponse,
    Message, MessageId, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use commands::{Command, CommandLine};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig};
pub use handlers::{CommandHandler, CommandSettings, LoggingHandler, ResponseHandler};
pub use ledger::{ClearReport, MessageLedger, SharedLedger, TimestampLog};
pub use mention::{addressed_text, extract_question, is_bot_mentioned};
pub use responses::{classify, handle_response, Intent, DEFAULT_REPLY};
pub use runner::run_bot;
pub use sentiment::{Mood, PolarityScores, SentimentScorer, VaderScorer};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
