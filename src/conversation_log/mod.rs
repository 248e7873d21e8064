//! Best-effort log of answered messages.

mod schema;
mod sqlite;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::emotion::EmotionCategory;

pub use sqlite::{DB_FILENAME, LogError, SqliteConversationLog};

/// One answered message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationEntry {
    pub user_message: String,
    pub bot_response: String,
    pub emotion: EmotionCategory,
    pub timestamp: DateTime<Utc>,
    pub ip_address: Option<String>,
}

impl ConversationEntry {
    /// Entry stamped with the current time.
    pub fn new(
        user_message: impl Into<String>,
        bot_response: impl Into<String>,
        emotion: EmotionCategory,
    ) -> Self {
        Self {
            user_message: user_message.into(),
            bot_response: bot_response.into(),
            emotion,
            timestamp: Utc::now(),
            ip_address: None,
        }
    }
}

/// Append-only store of conversation turns.
pub trait ConversationLog {
    fn append(&self, entry: &ConversationEntry) -> Result<(), LogError>;

    /// Up to `limit` newest entries, oldest first.
    fn recent(&self, limit: usize) -> Result<Vec<ConversationEntry>, LogError>;
}
