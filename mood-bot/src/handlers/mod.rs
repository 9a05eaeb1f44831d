//! Handlers making up the bot's chain: logging, slash commands, free-text replies.

mod command_handler;
mod logging_handler;
mod response_handler;

pub use command_handler::{
    CommandHandler, CommandSettings, BROADCAST_OK_REPLY, CLEARED_REPLY, CUSTOM_REPLY, HELP_REPLY,
    SEND_OK_REPLY, START_REPLY, WEBSITE_MISSING_REPLY,
};
pub use logging_handler::LoggingHandler;
pub use response_handler::ResponseHandler;
