//! SQL DDL for the wisdom tables.
//!
//! Five entity tables (`traditions`, `philosophers`, `themes`, `evidence`, `quotes`),
//! their link tables, and `schema_meta`. List-valued columns hold JSON arrays. All DDL
//! uses `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

/// All schema DDL statements for the base (version 1) tables.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS traditions (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    origin TEXT,
    core_principles TEXT NOT NULL DEFAULT '[]'
);

CREATE TABLE IF NOT EXISTS tradition_relations (
    tradition_id TEXT NOT NULL REFERENCES traditions(id),
    related_id TEXT NOT NULL REFERENCES traditions(id),
    PRIMARY KEY (tradition_id, related_id)
);

CREATE TABLE IF NOT EXISTS philosophers (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    tradition_id TEXT NOT NULL REFERENCES traditions(id),
    era TEXT,
    bio TEXT,
    key_teachings TEXT NOT NULL DEFAULT '[]'
);

CREATE INDEX IF NOT EXISTS idx_philosophers_tradition ON philosophers(tradition_id);

CREATE TABLE IF NOT EXISTS themes (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS theme_traditions (
    theme_id TEXT NOT NULL REFERENCES themes(id),
    tradition_id TEXT NOT NULL REFERENCES traditions(id),
    PRIMARY KEY (theme_id, tradition_id)
);

CREATE TABLE IF NOT EXISTS evidence (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    finding TEXT,
    field TEXT,
    source TEXT
);

CREATE INDEX IF NOT EXISTS idx_evidence_field ON evidence(field);

CREATE TABLE IF NOT EXISTS evidence_themes (
    evidence_id TEXT NOT NULL REFERENCES evidence(id),
    theme_id TEXT NOT NULL REFERENCES themes(id),
    PRIMARY KEY (evidence_id, theme_id)
);

CREATE TABLE IF NOT EXISTS quotes (
    id TEXT PRIMARY KEY,
    slug TEXT UNIQUE,
    title TEXT,
    text TEXT NOT NULL,
    philosopher_id TEXT NOT NULL REFERENCES philosophers(id),
    tradition_id TEXT NOT NULL REFERENCES traditions(id),
    source TEXT,
    summary TEXT
);

CREATE INDEX IF NOT EXISTS idx_quotes_philosopher ON quotes(philosopher_id);
CREATE INDEX IF NOT EXISTS idx_quotes_tradition ON quotes(tradition_id);

CREATE TABLE IF NOT EXISTS quote_themes (
    quote_id TEXT NOT NULL REFERENCES quotes(id),
    theme_id TEXT NOT NULL REFERENCES themes(id),
    PRIMARY KEY (quote_id, theme_id)
);

CREATE INDEX IF NOT EXISTS idx_quote_themes_theme ON quote_themes(theme_id);

CREATE TABLE IF NOT EXISTS quote_evidence (
    quote_id TEXT NOT NULL REFERENCES quotes(id),
    evidence_id TEXT NOT NULL REFERENCES evidence(id),
    PRIMARY KEY (quote_id, evidence_id)
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables = table_names(&conn);
        for expected in [
            "traditions",
            "tradition_relations",
            "philosophers",
            "themes",
            "theme_traditions",
            "evidence",
            "evidence_themes",
            "quotes",
            "quote_themes",
            "quote_evidence",
            "schema_meta",
        ] {
            assert!(tables.contains(&expected.to_string()), "missing table {expected}");
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap(); // second call should not error
    }

    #[test]
    fn foreign_keys_reject_dangling_philosopher() {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "foreign_keys", "ON").unwrap();
        init_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO philosophers (id, name, tradition_id, key_teachings) \
             VALUES ('zeno', 'Zeno', 'missing', '[]')",
            [],
        );
        assert!(result.is_err());
    }
}
