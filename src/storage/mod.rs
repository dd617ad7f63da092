use crate::error::{PromptlogError, Result};
use anyhow::Context;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};

pub mod types;
pub use types::{Prompt, WordCountSample};

// Table and column names match databases written by earlier releases.
const CREATE_PROMPTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS prompts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    prompt TEXT NOT NULL,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
    completed BOOLEAN NOT NULL DEFAULT 0
)";

const CREATE_WRITING_SESSION_TABLE: &str = "CREATE TABLE IF NOT EXISTS WritingSession (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    wordcount INTEGER NOT NULL,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// Storage backend for prompts and word counts
///
/// Holds only the database path. Every operation opens its own
/// connection, so a single instance can be shared across request tasks
/// without a lock; SQLite serialises concurrent writers itself.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

fn storage_error(context: &'static str) -> impl FnOnce(rusqlite::Error) -> PromptlogError {
    move |e| PromptlogError::Storage(format!("{}: {}", context, e))
}

impl SqliteStorage {
    /// Open (or create) the database at `db_path` and ensure the schema exists
    ///
    /// Safe to call against an existing database: tables are only created
    /// when missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptlog::storage::SqliteStorage;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let storage = SqliteStorage::new_with_path(dir.path().join("prompts.db")).unwrap();
    /// assert!(storage.list_word_counts().unwrap().is_empty());
    /// ```
    pub fn new_with_path<P: Into<PathBuf>>(db_path: P) -> Result<Self> {
        let db_path = db_path.into();

        // Ensure parent directory exists so opening the DB file succeeds.
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for database")
                .map_err(|e| PromptlogError::Storage(format!("{:#}", e)))?;
        }

        let storage = Self { db_path };
        storage.init()?;
        tracing::debug!(db_path = %storage.db_path.display(), "Storage initialized");
        Ok(storage)
    }

    /// Path of the backing database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        let conn =
            Connection::open(&self.db_path).map_err(storage_error("Failed to open database"))?;
        Ok(conn)
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(CREATE_PROMPTS_TABLE, [])
            .map_err(storage_error("Failed to create prompts table"))?;
        conn.execute(CREATE_WRITING_SESSION_TABLE, [])
            .map_err(storage_error("Failed to create WritingSession table"))?;

        Ok(())
    }

    /// Record a new, not yet completed prompt and return its id
    pub fn add_prompt(&self, text: &str) -> Result<i64> {
        let conn = self.connect()?;

        conn.execute("INSERT INTO prompts (prompt) VALUES (?1)", params![text])
            .map_err(storage_error("Failed to insert prompt"))?;

        Ok(conn.last_insert_rowid())
    }

    /// List prompts with the given completion flag, oldest first
    pub fn list_prompts(&self, completed: bool) -> Result<Vec<Prompt>> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, prompt, timestamp, completed
                FROM prompts
                WHERE completed = ?1
                ORDER BY id ASC",
            )
            .map_err(storage_error("Failed to prepare statement"))?;

        let prompts = stmt
            .query_map(params![completed], prompt_from_row)
            .map_err(storage_error("Failed to query prompts"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(storage_error("Failed to read prompt row"))?;

        Ok(prompts)
    }

    /// Mark a prompt as completed
    ///
    /// Returns the number of rows changed. An unknown id changes nothing
    /// and is not an error.
    pub fn set_completed(&self, id: i64) -> Result<usize> {
        let conn = self.connect()?;

        let changed = conn
            .execute("UPDATE prompts SET completed = 1 WHERE id = ?1", params![id])
            .map_err(storage_error("Failed to mark prompt as completed"))?;

        Ok(changed)
    }

    /// Record a word count sample and return its id
    pub fn add_word_count(&self, word_count: i64) -> Result<i64> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO WritingSession (wordcount) VALUES (?1)",
            params![word_count],
        )
        .map_err(storage_error("Failed to insert word count"))?;

        Ok(conn.last_insert_rowid())
    }

    /// List every word count sample, oldest first
    pub fn list_word_counts(&self) -> Result<Vec<WordCountSample>> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, wordcount, timestamp
                FROM WritingSession
                ORDER BY id ASC",
            )
            .map_err(storage_error("Failed to prepare statement"))?;

        let samples = stmt
            .query_map([], |row| {
                let created_at: NaiveDateTime = row.get(2)?;
                Ok(WordCountSample {
                    id: row.get(0)?,
                    word_count: row.get(1)?,
                    created_at: created_at.and_utc(),
                })
            })
            .map_err(storage_error("Failed to query word counts"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(storage_error("Failed to read word count row"))?;

        Ok(samples)
    }
}

fn prompt_from_row(row: &Row<'_>) -> rusqlite::Result<Prompt> {
    // CURRENT_TIMESTAMP is UTC without an offset.
    let created_at: NaiveDateTime = row.get(2)?;
    Ok(Prompt {
        id: row.get(0)?,
        text: row.get(1)?,
        created_at: created_at.and_utc(),
        completed: row.get(3)?,
    })
}
