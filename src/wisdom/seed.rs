//! Seed loader.
//!
//! Populates an empty repository from a [`Dataset`] exactly once. The only marker
//! consulted is the quote count: a repository holding any quote is considered
//! seeded, whatever the other tables contain. Each backend loads atomically, so a
//! failed run leaves nothing behind and can simply be retried.

use serde::Serialize;

use crate::error::RepoResult;
use crate::wisdom::dataset::Dataset;
use crate::wisdom::types::DatasetCounts;
use crate::wisdom::Repository;

/// A repository that can take a one-shot bulk load.
pub trait Seedable: Repository {
    /// Insert every record of `data` as one unit: traditions and their relations,
    /// philosophers, themes and their tradition links, evidence and its theme
    /// links, then quotes with their theme and evidence links. Records and links
    /// already present are left as they are; on any other failure nothing is kept.
    fn load(&mut self, data: &Dataset) -> RepoResult<()>;
}

/// What a [`seed`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    Seeded(DatasetCounts),
    Skipped { quotes: u64 },
}

/// Seed `repo` with `data` unless it already holds quotes.
pub fn seed<R: Seedable + ?Sized>(repo: &mut R, data: &Dataset) -> RepoResult<SeedOutcome> {
    let existing = repo.counts()?.quotes;
    if existing > 0 {
        tracing::info!(quotes = existing, backend = repo.backend(), "already seeded, skipping");
        return Ok(SeedOutcome::Skipped { quotes: existing });
    }

    repo.load(data)?;
    let counts = repo.counts()?;
    tracing::info!(
        backend = repo.backend(),
        traditions = counts.traditions,
        philosophers = counts.philosophers,
        themes = counts.themes,
        evidence = counts.evidence,
        quotes = counts.quotes,
        "seeded reference dataset"
    );
    Ok(SeedOutcome::Seeded(counts))
}
