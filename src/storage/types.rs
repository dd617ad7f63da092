use chrono::{DateTime, Utc};

/// A writing prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Row id, assigned by the database
    pub id: i64,
    /// Free-form prompt text (may be empty)
    pub text: String,
    /// When the prompt was recorded
    pub created_at: DateTime<Utc>,
    /// Whether the prompt has been written
    pub completed: bool,
}

/// One logged word count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountSample {
    /// Row id, assigned by the database
    pub id: i64,
    /// Number of words written; not range checked
    pub word_count: i64,
    /// When the sample was recorded
    pub created_at: DateTime<Utc>,
}
