//! Sent-message ledger: ids of every message the bot sent, plus a persisted timestamp log.
//!
//! The ids live in memory and are consumed by `/clear`, which deletes each tracked message. Every
//! recorded message also appends an ISO-8601 timestamp to a JSON array on disk; that log only
//! grows. Appends are read-modify-write: load the array, push, write it to a sibling temp file and
//! rename it over the log. Callers share the ledger behind a `tokio::sync::Mutex`, which keeps
//! appends from interleaving.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::core::{Bot, ChatId, DbotError, MessageId, Result};

/// Timestamp format written to the log (local time, microseconds).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Ledger shared between handlers.
pub type SharedLedger = Arc<Mutex<MessageLedger>>;

/// File-backed JSON array of timestamp strings.
#[derive(Debug, Clone)]
pub struct TimestampLog {
    path: PathBuf,
}

impl TimestampLog {
    /// Opens the log at `path`, creating it as `[]` (and its parent directories) when absent.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, b"[]").await?;
            info!(path = %path.display(), "Created message log");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full log.
    pub async fn load(&self) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| {
            DbotError::Persistence(format!(
                "{} is not a JSON array of strings: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Appends one timestamp: load, push, rewrite.
    pub async fn append(&self, timestamp: String) -> Result<()> {
        let mut entries = self.load().await?;
        entries.push(timestamp);
        let body = serde_json::to_vec(&entries)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

/// Outcome of a `/clear` pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearReport {
    pub deleted: usize,
    pub failed: usize,
}

impl ClearReport {
    pub fn all_deleted(&self) -> bool {
        self.failed == 0
    }
}

/// Ids of messages the bot sent, in send order, plus the timestamp log.
#[derive(Debug)]
pub struct MessageLedger {
    ids: Vec<MessageId>,
    log: TimestampLog,
}

impl MessageLedger {
    /// Opens the ledger with its timestamp log at `path`. The id list starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let log = TimestampLog::open(path).await?;
        Ok(Self {
            ids: Vec::new(),
            log,
        })
    }

    /// Tracks a sent message and appends the current time to the log.
    pub async fn record(&mut self, message_id: MessageId) -> Result<()> {
        self.ids.push(message_id);
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.log.append(timestamp).await?;
        debug!(message_id = message_id, tracked = self.ids.len(), "Recorded sent message");
        Ok(())
    }

    /// Deletes every tracked message from `chat_id`, in insertion order, then forgets them all.
    ///
    /// A failed delete is logged and skipped; nothing is retried. The id list is cleared even when
    /// some deletes failed.
    #[instrument(skip(self, bot), fields(tracked = self.ids.len()))]
    pub async fn drain_and_delete(&mut self, chat_id: ChatId, bot: &dyn Bot) -> ClearReport {
        let mut report = ClearReport::default();
        for &message_id in &self.ids {
            match bot.delete_message(chat_id, message_id).await {
                Ok(()) => report.deleted += 1,
                Err(e) => {
                    warn!(
                        chat_id = chat_id,
                        message_id = message_id,
                        error = %e,
                        "Failed to delete message"
                    );
                    report.failed += 1;
                }
            }
        }
        self.ids.clear();
        info!(deleted = report.deleted, failed = report.failed, "Ledger drained");
        report
    }

    pub fn ids(&self) -> &[MessageId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn log(&self) -> &TimestampLog {
        &self.log
    }

    pub fn into_shared(self) -> SharedLedger {
        Arc::new(Mutex::new(self))
    }
}
