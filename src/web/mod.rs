//! HTTP presentation layer: JSON API, server-rendered pages and HTML partials.
//!
//! Handlers never touch storage directly. Every repository call goes through
//! [`blocking`], which moves it onto tokio's blocking pool, so a SQLite query never
//! stalls the async workers.

pub mod api;
pub mod html;
pub mod pages;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::error::{ErrorKind, RepoError, RepoResult};
use crate::wisdom::Repository;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    /// Requested size of `/api/quotes/search` results.
    pub search_limit: usize,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository>, search_limit: usize) -> Self {
        Self { repo, search_limit }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Repo(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Unsupported => StatusCode::NOT_IMPLEMENTED,
                ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
            },
            WebError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Server faults are logged here and reported generically.
    fn public_message(&self) -> String {
        let status = self.status();
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Run a repository call on the blocking pool.
pub async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, WebError>
where
    F: FnOnce(&dyn Repository) -> RepoResult<T> + Send + 'static,
    T: Send + 'static,
{
    let repo = Arc::clone(&state.repo);
    Ok(tokio::task::spawn_blocking(move || f(repo.as_ref())).await??)
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        // JSON API
        .route("/api/quotes", get(api::list_quotes))
        .route("/api/quotes/random", get(api::random_quote))
        .route("/api/quotes/search", get(api::search_quotes))
        .route("/api/quotes/{id}", get(api::get_quote))
        .route("/api/philosophers", get(api::list_philosophers))
        .route("/api/philosophers/{id}", get(api::get_philosopher))
        .route("/api/traditions", get(api::list_traditions))
        .route("/api/traditions/{id}", get(api::get_tradition))
        .route("/api/philosophies", get(api::list_philosophies))
        .route("/api/philosophies/{id}", get(api::get_tradition))
        .route("/api/themes", get(api::list_themes))
        .route("/api/themes/{id}", get(api::get_theme))
        .route("/api/evidence", get(api::list_evidence))
        .route("/api/evidence/{id}", get(api::get_evidence))
        // HTML
        .route("/", get(pages::home))
        .route("/partials/random-quote", get(pages::random_quote_partial))
        .route("/pages/quotes", get(pages::quotes))
        .route("/pages/philosophers", get(pages::philosophers))
        .route("/pages/philosophers/{id}", get(pages::philosopher_detail))
        .route("/pages/traditions", get(pages::traditions))
        .route("/pages/traditions/{id}", get(pages::tradition_detail))
        .route("/pages/philosophies", get(pages::traditions))
        .route("/pages/philosophies/{id}", get(pages::tradition_detail))
        .route("/pages/themes", get(pages::themes))
        .route("/pages/themes/{id}", get(pages::theme_detail))
        .route("/pages/evidence", get(pages::evidence))
        .route("/pages/evidence/{id}", get(pages::evidence_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
