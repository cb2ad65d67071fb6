//! HTTP server startup.
//!
//! [`serve`] opens and seeds the repository before binding, so the first request
//! already sees the complete dataset.

use anyhow::{Context, Result};

use crate::config::WisdomConfig;
use crate::web::{self, AppState};
use crate::wisdom;

/// Start the HTTP server and run until ctrl-c.
pub async fn serve(config: WisdomConfig) -> Result<()> {
    let bind_addr = config.bind_addr();
    tracing::info!(
        addr = %bind_addr,
        backend = %config.storage.backend,
        "starting Perennial Wisdom server"
    );

    let repo = tokio::task::spawn_blocking({
        let config = config.clone();
        move || wisdom::open_repository(&config)
    })
    .await
    .context("repository setup task failed")??;

    let state = AppState::new(repo, config.search.max_results);
    let router = web::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "listening at http://{bind_addr}/");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
