//! Canned replies for free text.
//!
//! [`handle_response`] lower-cases the text and walks [`RESPONSE_TABLE`] top to bottom; the first
//! intent with a keyword occurring as a substring wins. No match yields [`DEFAULT_REPLY`].

use std::fmt;

/// Intent recognised in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    WellBeing,
    Morning,
    Night,
    Gratitude,
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::Greeting => "greeting",
            Intent::WellBeing => "well_being",
            Intent::Morning => "morning",
            Intent::Night => "night",
            Intent::Gratitude => "gratitude",
            Intent::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// One row of the response table.
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Reply when nothing in the table matches.
pub const DEFAULT_REPLY: &str = "I'm not sure how to respond to that.";

/// Ordered by priority; first match wins.
pub const RESPONSE_TABLE: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        keywords: &["hello", "hi", "hey", "heya"],
        reply: "Hey there!",
    },
    IntentRule {
        intent: Intent::WellBeing,
        keywords: &["how are you", "how are you doing", "how are you doin"],
        reply: "I am good, thank you! How can I assist you today?",
    },
    IntentRule {
        intent: Intent::Morning,
        keywords: &["gm", "good morning"],
        reply: "Good morning!",
    },
    IntentRule {
        intent: Intent::Night,
        keywords: &["good night", "gn"],
        reply: "Good night!",
    },
    IntentRule {
        intent: Intent::Gratitude,
        keywords: &["thank you", "thanks"],
        reply: "You're welcome!",
    },
];

/// Classifies `text` and returns the matched intent with its reply.
pub fn classify(text: &str) -> (Intent, &'static str) {
    let processed = text.to_lowercase();
    RESPONSE_TABLE
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| processed.contains(k)))
        .map(|rule| (rule.intent, rule.reply))
        .unwrap_or((Intent::Unknown, DEFAULT_REPLY))
}

/// Returns the canned reply for `text`.
pub fn handle_response(text: &str) -> &'static str {
    classify(text).1
}
