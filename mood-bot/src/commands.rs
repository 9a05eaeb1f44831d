//! Slash-command parsing.
//!
//! A command is text starting with `/`. The first whitespace-separated token is the verb, with an
//! optional `@botname` suffix; the remaining tokens are the arguments. Argument-count checks happen
//! in [`Command::from_line`] and surface as [`HandlerError::Usage`].

use crate::core::HandlerError;
use crate::mention::mention_of;

pub const USAGE_SENTIMENT: &str = "/sentiment <text>";
pub const USAGE_BROADCAST: &str = "/broadcast <message>";
pub const USAGE_SEND: &str = "/send <username> <message>";

/// Verb and arguments of a slash command, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub verb: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Splits `text` into verb and arguments.
    ///
    /// Returns `None` when `text` is not a command, or when it is addressed to another bot
    /// (`/start@other_bot`). The verb is lower-cased.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let rest = text.trim_start().strip_prefix('/')?;
        let mut tokens = rest.split_whitespace();
        let head = tokens.next()?;

        let verb = match head.split_once('@') {
            Some((verb, target)) => {
                let ours = bot_username
                    .map(|u| mention_of(u).eq_ignore_ascii_case(&mention_of(target)))
                    .unwrap_or(false);
                if !ours {
                    return None;
                }
                verb
            }
            None => head,
        };
        if verb.is_empty() {
            return None;
        }

        Some(Self {
            verb: verb.to_lowercase(),
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// Arguments joined with single spaces.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}

/// A validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Custom,
    Sentiment { text: String },
    Clear,
    Broadcast { text: String },
    Send { username: String, text: String },
    Website,
}

impl Command {
    /// Validates arguments for the verb. Commands without parameters ignore extra arguments.
    pub fn from_line(line: &CommandLine) -> Result<Self, HandlerError> {
        match line.verb.as_str() {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "custom" => Ok(Command::Custom),
            "clear" => Ok(Command::Clear),
            "website" => Ok(Command::Website),
            "sentiment" => {
                let text = line.joined_args();
                if text.is_empty() {
                    return Err(HandlerError::Usage(USAGE_SENTIMENT.to_string()));
                }
                Ok(Command::Sentiment { text })
            }
            "broadcast" => {
                if line.args.is_empty() {
                    return Err(HandlerError::Usage(USAGE_BROADCAST.to_string()));
                }
                Ok(Command::Broadcast {
                    text: line.joined_args(),
                })
            }
            "send" => match line.args.as_slice() {
                [username, rest @ ..] if !rest.is_empty() => Ok(Command::Send {
                    username: username.clone(),
                    text: rest.join(" "),
                }),
                _ => Err(HandlerError::Usage(USAGE_SEND.to_string())),
            },
            other => Err(HandlerError::UnknownCommand(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Custom => "custom",
            Command::Sentiment { .. } => "sentiment",
            Command::Clear => "clear",
            Command::Broadcast { .. } => "broadcast",
            Command::Send { .. } => "send",
            Command::Website => "website",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<CommandLine> {
        CommandLine::parse(text, Some("mood_bot"))
    }

    #[test]
    fn test_parse_plain_text_is_not_a_command() {
        assert!(parse("hello").is_none());
        assert!(parse("").is_none());
        assert!(parse("/").is_none());
    }

    #[test]
    fn test_parse_verb_and_args() {
        let line = parse("/Send  @alice hi   there").unwrap();
        assert_eq!(line.verb, "send");
        assert_eq!(line.args, vec!["@alice", "hi", "there"]);
    }

    #[test]
    fn test_parse_bot_suffix() {
        assert_eq!(parse("/start@mood_bot").unwrap().verb, "start");
        assert_eq!(parse("/start@Mood_Bot").unwrap().verb, "start");
        assert!(parse("/start@other_bot").is_none());
        assert!(CommandLine::parse("/start@mood_bot", None).is_none());
    }

    #[test]
    fn test_sentiment_requires_text() {
        let err = Command::from_line(&parse("/sentiment").unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "Usage: /sentiment <text>");

        let cmd = Command::from_line(&parse("/sentiment so  happy").unwrap()).unwrap();
        assert_eq!(cmd, Command::Sentiment { text: "so happy".to_string() });
    }

    #[test]
    fn test_send_requires_username_and_text() {
        let err = Command::from_line(&parse("/send alice").unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "Usage: /send <username> <message>");

        let cmd = Command::from_line(&parse("/send alice see you soon").unwrap()).unwrap();
        assert_eq!(
            cmd,
            Command::Send {
                username: "alice".to_string(),
                text: "see you soon".to_string()
            }
        );
    }

    #[test]
    fn test_broadcast_requires_text() {
        assert!(matches!(
            Command::from_line(&parse("/broadcast").unwrap()),
            Err(HandlerError::Usage(_))
        ));
    }

    #[test]
    fn test_unknown_verb() {
        assert!(matches!(
            Command::from_line(&parse("/dance now").unwrap()),
            Err(HandlerError::UnknownCommand(v)) if v == "dance"
        ));
    }

    #[test]
    fn test_extra_args_ignored_for_simple_commands() {
        assert_eq!(Command::from_line(&parse("/help me").unwrap()).unwrap(), Command::Help);
    }
}
