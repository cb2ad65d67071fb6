use anyhow::Result;

use crate::config::{Backend, WisdomConfig};
use crate::wisdom::dataset;

/// Display row counts for the configured backend next to the reference dataset.
pub fn stats(config: &WisdomConfig) -> Result<()> {
    let repo = crate::wisdom::open_unseeded(config)?;
    let stored = repo.counts()?;
    let reference = dataset::reference().counts();

    println!("Wisdom Statistics ({})", config.storage.backend);
    println!("{}", "=".repeat(40));
    println!("  {:<14} {:>8} {:>10}", "", "stored", "reference");
    for (label, have, want) in [
        ("Traditions", stored.traditions, reference.traditions),
        ("Philosophers", stored.philosophers, reference.philosophers),
        ("Themes", stored.themes, reference.themes),
        ("Evidence", stored.evidence, reference.evidence),
        ("Quotes", stored.quotes, reference.quotes),
    ] {
        println!("  {label:<14} {have:>8} {want:>10}");
    }
    println!();

    match config.storage.backend {
        Backend::Sqlite => {
            let db_path = config.resolved_db_path();
            let size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
            println!("Database:        {}", db_path.display());
            println!("Database size:   {size} bytes");
        }
        Backend::Memory => {
            println!("The memory backend is seeded when `perennial serve` starts.");
        }
    }
    if stored.quotes == 0 {
        println!("Not seeded yet. Run `perennial seed`.");
    }

    Ok(())
}
