//! Command-line interface definition for promptlog
//!
//! This module defines the CLI structure using clap's derive API.

use clap::Parser;
use std::path::PathBuf;

/// promptlog - writing prompt and word count tracker
///
/// Serves a small web UI for recording writing prompts and daily
/// word counts in a local SQLite database.
#[derive(Parser, Debug, Clone)]
#[command(name = "promptlog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Override the listen host from config
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port from config
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the SQLite database path from config
    #[arg(long = "db")]
    pub db_path: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            json_logs: false,
            host: None,
            port: None,
            db_path: None,
        }
    }
}
