//! promptlog - writing prompt and word count tracker
//!
//! A small web application that records writing prompts and daily word
//! counts in a SQLite database and renders them as HTML pages.
//!
//! # Architecture
//!
//! - `storage`: SQLite schema and the queries behind every page
//! - `web`: axum router, request handlers and HTML views
//! - `config`: Configuration loading and validation
//! - `cli`: Command-line interface definition
//! - `error`: Error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use promptlog::{storage::SqliteStorage, web, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let storage = SqliteStorage::new_with_path(&config.storage.db_path)?;
//!     web::serve(&config.server, storage).await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::{PromptlogError, Result};
pub use storage::{Prompt, SqliteStorage, WordCountSample};

#[cfg(test)]
pub mod test_utils;
