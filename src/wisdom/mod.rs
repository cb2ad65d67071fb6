//! Read-only query contract over the wisdom dataset.
//!
//! [`Repository`] is implemented by [`memory::MemoryRepository`] (maps, linear scans)
//! and [`sqlite::SqliteRepository`] (SQL joins). Both return the same rows in the
//! same order for every operation:
//!
//! - quotes in insertion (seed) order
//! - philosophers, traditions and themes by name, evidence by title
//! - related-name lists by name
//!
//! Ties break by id. Relation queries never fail for an unknown parent; they return
//! an empty list, and only the direct `get_*` surfaces [`RepoError::NotFound`].

pub mod dataset;
pub mod memory;
pub mod seed;
pub mod sqlite;
pub mod types;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::{Backend, WisdomConfig};
use crate::error::{RepoError, RepoResult};
use types::{
    DatasetCounts, EvidenceRow, PhilosopherRow, QuoteFilter, QuoteRow, ThemeRow, TraditionRow,
};

/// Quotes returned by a full-text search, at most.
pub const SEARCH_RESULT_CAP: usize = 50;

pub trait Repository: Send + Sync {
    /// Short backend name for logs and `/health`.
    fn backend(&self) -> &'static str;

    fn counts(&self) -> RepoResult<DatasetCounts>;

    // ── Quotes ──

    fn list_quotes(&self, filter: &QuoteFilter) -> RepoResult<Vec<QuoteRow>>;

    /// Look up by primary id, falling back to the slug.
    fn get_quote(&self, id_or_slug: &str) -> RepoResult<QuoteRow>;

    /// Some quote from the full set; [`RepoError::Empty`] when there are none.
    fn random_quote(&self) -> RepoResult<QuoteRow>;

    fn quote_themes(&self, quote_id: &str) -> RepoResult<Vec<ThemeRow>>;

    fn quote_evidence(&self, quote_id: &str) -> RepoResult<Vec<EvidenceRow>>;

    /// Full-text match over quote text, title and summary, best match first,
    /// capped at `limit` (never above [`SEARCH_RESULT_CAP`]).
    fn search_quotes(&self, _text: &str, _limit: usize) -> RepoResult<Vec<QuoteRow>> {
        Err(RepoError::Unsupported("quote search"))
    }

    // ── Philosophers ──

    fn list_philosophers(&self, tradition: Option<&str>) -> RepoResult<Vec<PhilosopherRow>>;

    fn get_philosopher(&self, id: &str) -> RepoResult<PhilosopherRow>;

    fn philosopher_quotes(&self, philosopher_id: &str) -> RepoResult<Vec<QuoteRow>> {
        self.list_quotes(&QuoteFilter::by_philosopher(philosopher_id))
    }

    // ── Traditions ──

    fn list_traditions(&self) -> RepoResult<Vec<TraditionRow>>;

    fn get_tradition(&self, id: &str) -> RepoResult<TraditionRow>;

    /// Names of the traditions `id` lists as related.
    fn tradition_related(&self, id: &str) -> RepoResult<Vec<String>>;

    fn tradition_philosophers(&self, tradition_id: &str) -> RepoResult<Vec<PhilosopherRow>> {
        self.list_philosophers(Some(tradition_id))
    }

    fn tradition_quotes(&self, tradition_id: &str) -> RepoResult<Vec<QuoteRow>> {
        self.list_quotes(&QuoteFilter::by_tradition(tradition_id))
    }

    // ── Themes ──

    fn list_themes(&self) -> RepoResult<Vec<ThemeRow>>;

    fn get_theme(&self, id: &str) -> RepoResult<ThemeRow>;

    /// Names of the traditions a theme spans.
    fn theme_traditions(&self, theme_id: &str) -> RepoResult<Vec<String>>;

    fn theme_quotes(&self, theme_id: &str) -> RepoResult<Vec<QuoteRow>> {
        self.list_quotes(&QuoteFilter::by_theme(theme_id))
    }

    fn theme_evidence(&self, theme_id: &str) -> RepoResult<Vec<EvidenceRow>>;

    // ── Evidence ──

    fn list_evidence(&self, field: Option<&str>) -> RepoResult<Vec<EvidenceRow>>;

    fn get_evidence(&self, id: &str) -> RepoResult<EvidenceRow>;

    fn evidence_themes(&self, evidence_id: &str) -> RepoResult<Vec<ThemeRow>>;

    fn evidence_quotes(&self, evidence_id: &str) -> RepoResult<Vec<QuoteRow>>;
}

/// Open the configured backend as-is, without seeding. Used by the CLI commands
/// that inspect or populate storage explicitly.
pub fn open_unseeded(config: &WisdomConfig) -> Result<Box<dyn seed::Seedable>> {
    let repo: Box<dyn seed::Seedable> = match config.storage.backend {
        Backend::Memory => Box::new(memory::MemoryRepository::new()),
        Backend::Sqlite => {
            let conn = crate::db::open_database(config.resolved_db_path())?;
            Box::new(sqlite::SqliteRepository::new(conn))
        }
    };
    Ok(repo)
}

/// Open the configured backend and seed it with the reference dataset.
///
/// Seeding finishes before this returns, so nothing served afterwards can observe
/// a partially loaded repository.
pub fn open_repository(config: &WisdomConfig) -> Result<Arc<dyn Repository>> {
    let data = dataset::reference();

    let repo: Arc<dyn Repository> = match config.storage.backend {
        Backend::Memory => {
            let mut repo = memory::MemoryRepository::new();
            seed::seed(&mut repo, data).context("failed to seed in-memory repository")?;
            Arc::new(repo)
        }
        Backend::Sqlite => {
            let db_path = config.resolved_db_path();
            let conn = crate::db::open_database(&db_path)?;
            let mut repo = sqlite::SqliteRepository::new(conn);
            seed::seed(&mut repo, data).context("failed to seed database")?;
            Arc::new(repo)
        }
    };

    tracing::info!(backend = repo.backend(), "repository ready");
    Ok(repo)
}
