//! Shared helpers for integration tests: message builders, a recording [`MockBot`], a fixed scorer.

#![allow(dead_code)]

pub mod mock_bot;

use std::sync::Arc;

use chrono::Utc;
use mood_bot::{Chat, ChatKind, Message, PolarityScores, SentimentScorer, User};
use tempfile::TempDir;

pub use mock_bot::{BotCall, MockBot};

pub const USER_ID: i64 = 456;
pub const CHAT_ID: i64 = 123;

pub fn make_message(content: &str, kind: ChatKind) -> Message {
    Message {
        id: 1,
        user: User {
            id: USER_ID,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat { id: CHAT_ID, kind },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

pub fn private_message(content: &str) -> Message {
    make_message(content, ChatKind::Private)
}

pub fn group_message(content: &str) -> Message {
    make_message(content, ChatKind::Group)
}

/// Opens a ledger in a fresh temp dir; keep the dir alive for the test.
pub async fn temp_ledger() -> (TempDir, mood_bot::SharedLedger) {
    let dir = TempDir::new().unwrap();
    let ledger = mood_bot::MessageLedger::open(dir.path().join("message_log.json"))
        .await
        .unwrap()
        .into_shared();
    (dir, ledger)
}

/// Scorer returning fixed scores and counting calls.
pub struct FixedScorer {
    pub scores: PolarityScores,
    pub calls: std::sync::atomic::AtomicUsize,
}

impl FixedScorer {
    pub fn with_compound(compound: f64) -> Arc<Self> {
        Arc::new(Self {
            scores: PolarityScores {
                neg: 0.0,
                neu: 0.5,
                pos: 0.5,
                compound,
            },
            calls: std::sync::atomic::AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl SentimentScorer for FixedScorer {
    fn polarity_scores(&self, _text: &str) -> PolarityScores {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.scores
    }
}
