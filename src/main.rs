//! promptlog - writing prompt and word count tracker
//!
//! Main entry point: parse arguments, load configuration, open the
//! database and serve the web UI.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use promptlog::cli::Cli;
use promptlog::config::Config;
use promptlog::storage::SqliteStorage;
use promptlog::web;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose, cli.json_logs);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    tracing::info!(
        db_path = %config.storage.db_path.display(),
        "Opening prompt database"
    );
    let storage = SqliteStorage::new_with_path(&config.storage.db_path)?;

    web::serve(&config.server, storage).await
}

/// Initialize tracing subscriber with environment filter
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "promptlog=debug,tower_http=debug"
    } else {
        "promptlog=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
