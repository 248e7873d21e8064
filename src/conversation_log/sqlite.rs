//! SQLite-backed conversation log.
//!
//! One database file at `{root_dir}/conversations.db` with a single
//! `conversations` table.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use super::schema::apply_schema;
use super::{ConversationEntry, ConversationLog};
use crate::emotion::EmotionCategory;

/// Database filename within the log root directory.
pub const DB_FILENAME: &str = "conversations.db";

/// Errors from the SQLite log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

/// Conversation log stored in SQLite.
///
/// Thread-safe via an internal `Mutex<Connection>`.
pub struct SqliteConversationLog {
    conn: Mutex<Connection>,
}

impl SqliteConversationLog {
    /// Open (or create) the database at `{root_dir}/conversations.db`.
    pub fn new(root_dir: &Path) -> Result<Self, LogError> {
        std::fs::create_dir_all(root_dir).map_err(|e| LogError::Io(e.to_string()))?;
        let conn = Connection::open(root_dir.join(DB_FILENAME))?;
        apply_schema(&conn)?;
        tracing::debug!(root = %root_dir.display(), "conversation log opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, gone when dropped.
    pub fn in_memory() -> Result<Self, LogError> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Number of stored rows.
    pub fn len(&self) -> Result<usize, LogError> {
        let conn = self.lock()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM conversations", [], |r| r.get(0))?;
        Ok(usize::try_from(n).unwrap_or(0))
    }

    pub fn is_empty(&self) -> Result<bool, LogError> {
        Ok(self.len()? == 0)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, LogError> {
        self.conn.lock().map_err(|e| LogError::Lock(e.to_string()))
    }
}

impl ConversationLog for SqliteConversationLog {
    fn append(&self, entry: &ConversationEntry) -> Result<(), LogError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO conversations \
             (user_message, bot_response, emotion, timestamp, ip_address) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.user_message,
                entry.bot_response,
                entry.emotion.as_str(),
                entry.timestamp.to_rfc3339(),
                entry.ip_address,
            ],
        )?;
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ConversationEntry>, LogError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT user_message, bot_response, emotion, timestamp, ip_address \
             FROM conversations ORDER BY id DESC LIMIT ?1",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], row_to_entry)?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        entries.reverse();
        Ok(entries)
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<ConversationEntry> {
    let emotion: String = row.get(2)?;
    let timestamp: String = row.get(3)?;
    Ok(ConversationEntry {
        user_message: row.get(0)?,
        bot_response: row.get(1)?,
        emotion: str_to_emotion(&emotion),
        timestamp: parse_timestamp(&timestamp),
        ip_address: row.get(4)?,
    })
}

fn str_to_emotion(s: &str) -> EmotionCategory {
    s.parse().unwrap_or(EmotionCategory::Neutral)
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
