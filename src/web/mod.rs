//! HTTP surface: router, shared state and server loop

use crate::config::ServerConfig;
use crate::error::Result;
use crate::storage::SqliteStorage;
use anyhow::Context;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod views;

pub use error::WebError;

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub storage: Arc<SqliteStorage>,
}

impl AppState {
    pub fn new(storage: SqliteStorage) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }
}

/// Build the application router
///
/// | Route             | GET                  | POST               |
/// |-------------------|----------------------|--------------------|
/// | `/`, `/add`       | prompt form          | add prompt         |
/// | `/view`           | pending prompts      |                    |
/// | `/complete?id=N`  | mark complete        |                    |
/// | `/view_completed` | completed prompts    |                    |
/// | `/words`          | word count history   |                    |
/// | `/words/add`      | word count form      | add word count     |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::prompt_form).post(handlers::add_prompt))
        .route("/add", get(handlers::prompt_form).post(handlers::add_prompt))
        .route("/view", get(handlers::view_pending))
        .route("/complete", get(handlers::complete_prompt))
        .route("/view_completed", get(handlers::view_completed))
        .route("/words", get(handlers::view_word_counts))
        .route(
            "/words/add",
            get(handlers::word_count_form).post(handlers::add_word_count),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the application on an already bound listener until shutdown
pub async fn serve_with_listener(listener: TcpListener, storage: SqliteStorage) -> Result<()> {
    let app = router(AppState::new(storage));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn serve(config: &ServerConfig, storage: SqliteStorage) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Starting server on {}", addr);
    serve_with_listener(listener, storage).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
