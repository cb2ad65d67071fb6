//! CLI `check` command: validate the reference dataset and, for SQLite, the database.

use anyhow::{Context, Result};

use crate::config::{Backend, WisdomConfig};
use crate::db;
use crate::wisdom::dataset;
use crate::wisdom::memory::MemoryRepository;
use crate::wisdom::Repository;

/// Run diagnostics and print a report. Fails if any check fails.
pub fn check(config: &WisdomConfig) -> Result<()> {
    println!("Perennial Health Report");
    println!("=======================");
    println!();

    // Loading into a scratch repository verifies every cross-reference.
    let data = dataset::reference();
    let scratch = MemoryRepository::with_dataset(data)
        .context("reference dataset has dangling or duplicate references")?;
    let counts = scratch.counts()?;
    println!(
        "Reference data:    OK ({} traditions, {} philosophers, {} themes, {} evidence, {} quotes)",
        counts.traditions, counts.philosophers, counts.themes, counts.evidence, counts.quotes
    );

    if config.storage.backend == Backend::Memory {
        println!("Backend:           memory (nothing on disk to check)");
        return Ok(());
    }

    let db_path = config.resolved_db_path();
    if !db_path.exists() {
        println!("Database:          not found at {}", db_path.display());
        println!("Run `perennial seed` or `perennial serve` to create it.");
        return Ok(());
    }

    let conn = db::open_database(&db_path).context("failed to open database (may be corrupt)")?;
    let report = db::check_database_health(&conn).context("failed to run health check")?;

    println!("Database:          {}", db_path.display());
    println!("Schema version:    {}", report.schema_version);
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
    }
    println!("FK violations:     {}", report.foreign_key_violations);

    let healthy = report.integrity_ok && report.foreign_key_violations == 0;
    if !healthy {
        println!();
        println!("Recovery: delete {} and run `perennial seed`.", db_path.display());
    }
    anyhow::ensure!(healthy, "database at {} failed health checks", db_path.display());
    Ok(())
}
