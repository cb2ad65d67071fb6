pub mod check;
pub mod stats;

use anyhow::{Context, Result};

use crate::config::{Backend, WisdomConfig};
use crate::wisdom::dataset;
use crate::wisdom::seed::{self, SeedOutcome};

/// Seed the configured backend with the reference dataset, if it is empty.
pub fn seed(config: &WisdomConfig) -> Result<SeedOutcome> {
    let mut repo = crate::wisdom::open_unseeded(config)?;
    let outcome = seed::seed(repo.as_mut(), dataset::reference())
        .with_context(|| format!("failed to seed {} backend", config.storage.backend))?;

    match outcome {
        SeedOutcome::Seeded(counts) => {
            println!(
                "Seeded {} traditions, {} philosophers, {} themes, {} evidence, {} quotes.",
                counts.traditions, counts.philosophers, counts.themes, counts.evidence, counts.quotes
            );
        }
        SeedOutcome::Skipped { quotes } => {
            println!("Already seeded ({quotes} quotes), nothing to do.");
        }
    }
    if config.storage.backend == Backend::Memory {
        println!("Note: the memory backend is rebuilt on every start; nothing was persisted.");
    } else {
        println!("Database: {}", config.resolved_db_path().display());
    }
    Ok(outcome)
}
