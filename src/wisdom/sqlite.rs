//! SQLite backend.
//!
//! One connection behind a mutex. Reads join owning names in with `LEFT JOIN`, so a
//! row whose owner is missing still comes back, with an empty name. List columns are
//! decoded through [`crate::db::codec`] after the row is read.

use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::sync::{Mutex, MutexGuard};

use crate::db::codec::{decode_list, encode_list};
use crate::error::{RepoError, RepoResult};
use crate::wisdom::dataset::Dataset;
use crate::wisdom::seed::Seedable;
use crate::wisdom::types::{
    DatasetCounts, EvidenceRow, PhilosopherRow, QuoteFilter, QuoteRow, ThemeRow, TraditionRow,
};
use crate::wisdom::{Repository, SEARCH_RESULT_CAP};

const QUOTE_COLUMNS: &str = "q.id, COALESCE(q.slug, ''), COALESCE(q.title, ''), q.text, \
     q.philosopher_id, COALESCE(p.name, ''), q.tradition_id, COALESCE(t.name, ''), \
     COALESCE(q.source, ''), COALESCE(q.summary, '')";

const QUOTE_JOINS: &str = "LEFT JOIN philosophers p ON p.id = q.philosopher_id \
     LEFT JOIN traditions t ON t.id = q.tradition_id";

const PHILOSOPHER_SELECT: &str = "SELECT ph.id, ph.name, ph.tradition_id, COALESCE(t.name, ''), \
     COALESCE(ph.era, ''), COALESCE(ph.bio, ''), ph.key_teachings \
     FROM philosophers ph LEFT JOIN traditions t ON t.id = ph.tradition_id";

const TRADITION_SELECT: &str =
    "SELECT id, name, COALESCE(origin, ''), core_principles FROM traditions";

const THEME_COLUMNS: &str = "th.id, th.name, COALESCE(th.description, '')";

const EVIDENCE_COLUMNS: &str = "e.id, e.title, COALESCE(e.finding, ''), \
     COALESCE(e.field, ''), COALESCE(e.source, '')";

pub struct SqliteRepository {
    conn: Mutex<Connection>,
}

impl SqliteRepository {
    /// Wrap a connection that already has the schema and migrations applied
    /// (see [`crate::db::open_database`]).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::Poisoned)
    }

    fn query_quotes(
        &self,
        where_clause: &str,
        params: impl rusqlite::Params,
    ) -> RepoResult<Vec<QuoteRow>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes q {QUOTE_JOINS} {where_clause} ORDER BY q.rowid"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params, quote_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn query_themes(&self, sql: &str, id: &str) -> RepoResult<Vec<ThemeRow>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![id], theme_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn query_evidence(&self, sql: &str, arg: Option<&str>) -> RepoResult<Vec<EvidenceRow>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![arg], evidence_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn query_names(&self, sql: &str, id: &str) -> RepoResult<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let names = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    fn query_philosophers(
        &self,
        where_clause: &str,
        arg: Option<&str>,
    ) -> RepoResult<Vec<PhilosopherRow>> {
        let conn = self.conn()?;
        let sql = format!("{PHILOSOPHER_SELECT} {where_clause} ORDER BY ph.name, ph.id");
        let mut stmt = conn.prepare(&sql)?;
        let raw = stmt
            .query_map(params![arg], |row| {
                Ok((
                    PhilosopherRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        tradition_id: row.get(2)?,
                        tradition_name: row.get(3)?,
                        era: row.get(4)?,
                        bio: row.get(5)?,
                        key_teachings: Vec::new(),
                    },
                    row.get::<_, Option<String>>(6)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(mut p, teachings)| {
                p.key_teachings = decode_list("key_teachings", teachings.as_deref())?;
                Ok(p)
            })
            .collect()
    }

    fn query_traditions(&self, where_clause: &str, arg: Option<&str>) -> RepoResult<Vec<TraditionRow>> {
        let conn = self.conn()?;
        let sql = format!("{TRADITION_SELECT} {where_clause} ORDER BY name, id");
        let mut stmt = conn.prepare(&sql)?;
        let raw = stmt
            .query_map(params![arg], |row| {
                Ok((
                    TraditionRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        origin: row.get(2)?,
                        core_principles: Vec::new(),
                    },
                    row.get::<_, Option<String>>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(mut t, principles)| {
                t.core_principles = decode_list("core_principles", principles.as_deref())?;
                Ok(t)
            })
            .collect()
    }
}

fn quote_from_row(row: &Row<'_>) -> rusqlite::Result<QuoteRow> {
    Ok(QuoteRow {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        text: row.get(3)?,
        philosopher_id: row.get(4)?,
        philosopher_name: row.get(5)?,
        tradition_id: row.get(6)?,
        tradition_name: row.get(7)?,
        source: row.get(8)?,
        summary: row.get(9)?,
    })
}

fn theme_from_row(row: &Row<'_>) -> rusqlite::Result<ThemeRow> {
    Ok(ThemeRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn evidence_from_row(row: &Row<'_>) -> rusqlite::Result<EvidenceRow> {
    Ok(EvidenceRow {
        id: row.get(0)?,
        title: row.get(1)?,
        finding: row.get(2)?,
        field: row.get(3)?,
        source: row.get(4)?,
    })
}

/// Escape user text for FTS5 MATCH: each word becomes a quoted term, terms are
/// implicitly ANDed, and FTS operators in the input lose their meaning.
fn escape_fts_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| format!("\"{}\"", word.replace('"', "")))
        .filter(|w| w != "\"\"")
        .collect::<Vec<_>>()
        .join(" ")
}

fn insert_dataset(tx: &Transaction<'_>, data: &Dataset) -> RepoResult<()> {
    for t in &data.traditions {
        tx.execute(
            "INSERT OR IGNORE INTO traditions (id, name, origin, core_principles) VALUES (?1, ?2, ?3, ?4)",
            params![
                t.id,
                t.name,
                t.origin,
                encode_list("core_principles", &t.core_principles)?
            ],
        )?;
    }
    // Relations reference both ends, so they go in once every tradition exists.
    for t in &data.traditions {
        for related in &t.related_ids {
            tx.execute(
                "INSERT OR IGNORE INTO tradition_relations (tradition_id, related_id) VALUES (?1, ?2)",
                params![t.id, related],
            )?;
        }
    }

    for p in &data.philosophers {
        tx.execute(
            "INSERT OR IGNORE INTO philosophers (id, name, tradition_id, era, bio, key_teachings)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                p.id,
                p.name,
                p.tradition_id,
                p.era,
                p.bio,
                encode_list("key_teachings", &p.key_teachings)?
            ],
        )?;
    }

    for th in &data.themes {
        tx.execute(
            "INSERT OR IGNORE INTO themes (id, name, description) VALUES (?1, ?2, ?3)",
            params![th.id, th.name, th.description],
        )?;
        for tid in &th.tradition_ids {
            tx.execute(
                "INSERT OR IGNORE INTO theme_traditions (theme_id, tradition_id) VALUES (?1, ?2)",
                params![th.id, tid],
            )?;
        }
    }

    for e in &data.evidence {
        tx.execute(
            "INSERT OR IGNORE INTO evidence (id, title, finding, field, source) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![e.id, e.title, e.finding, e.field, e.source],
        )?;
        for tid in &e.theme_ids {
            tx.execute(
                "INSERT OR IGNORE INTO evidence_themes (evidence_id, theme_id) VALUES (?1, ?2)",
                params![e.id, tid],
            )?;
        }
    }

    for q in &data.quotes {
        let inserted = tx.execute(
            "INSERT OR IGNORE INTO quotes (id, slug, title, text, philosopher_id, tradition_id, source, summary)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                q.id,
                q.slug,
                q.title,
                q.text,
                q.philosopher_id,
                q.tradition_id,
                q.source,
                q.summary
            ],
        )?;
        if inserted == 1 {
            // Manual FTS sync (external-content table)
            tx.execute(
                "INSERT INTO quotes_fts (rowid, text, title, summary) VALUES (?1, ?2, ?3, ?4)",
                params![tx.last_insert_rowid(), q.text, q.title, q.summary],
            )?;
        } else if !quote_exists(tx, &q.id)? {
            // Ignored on the slug, not the id.
            return Err(RepoError::Integrity(format!(
                "quote {} reuses slug {}",
                q.id,
                q.slug.as_deref().unwrap_or_default()
            )));
        }
        for tid in &q.theme_ids {
            tx.execute(
                "INSERT OR IGNORE INTO quote_themes (quote_id, theme_id) VALUES (?1, ?2)",
                params![q.id, tid],
            )?;
        }
        for eid in &q.evidence_ids {
            tx.execute(
                "INSERT OR IGNORE INTO quote_evidence (quote_id, evidence_id) VALUES (?1, ?2)",
                params![q.id, eid],
            )?;
        }
    }

    Ok(())
}

fn quote_exists(tx: &Transaction<'_>, id: &str) -> RepoResult<bool> {
    Ok(tx
        .query_row("SELECT 1 FROM quotes WHERE id = ?1", [id], |_| Ok(()))
        .optional()?
        .is_some())
}

impl Seedable for SqliteRepository {
    fn load(&mut self, data: &Dataset) -> RepoResult<()> {
        let conn = self.conn.get_mut().map_err(|_| RepoError::Poisoned)?;
        let tx = conn.transaction()?;
        insert_dataset(&tx, data)?;
        tx.commit()?;
        Ok(())
    }
}

impl Repository for SqliteRepository {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn counts(&self) -> RepoResult<DatasetCounts> {
        let conn = self.conn()?;
        let count = |table: &str| -> RepoResult<u64> {
            let n: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
            Ok(n as u64)
        };
        Ok(DatasetCounts {
            traditions: count("traditions")?,
            philosophers: count("philosophers")?,
            themes: count("themes")?,
            evidence: count("evidence")?,
            quotes: count("quotes")?,
        })
    }

    fn list_quotes(&self, filter: &QuoteFilter) -> RepoResult<Vec<QuoteRow>> {
        self.query_quotes(
            "WHERE (?1 IS NULL OR q.philosopher_id = ?1)
               AND (?2 IS NULL OR q.tradition_id = ?2)
               AND (?3 IS NULL OR EXISTS (
                    SELECT 1 FROM quote_themes qt WHERE qt.quote_id = q.id AND qt.theme_id = ?3))",
            params![filter.philosopher, filter.tradition, filter.theme],
        )
    }

    fn get_quote(&self, id_or_slug: &str) -> RepoResult<QuoteRow> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes q {QUOTE_JOINS}
             WHERE q.id = ?1 OR q.slug = ?1
             ORDER BY (q.id = ?1) DESC LIMIT 1"
        );
        conn.query_row(&sql, params![id_or_slug], quote_from_row)
            .optional()?
            .ok_or_else(|| RepoError::not_found("quote", id_or_slug))
    }

    fn random_quote(&self) -> RepoResult<QuoteRow> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes q {QUOTE_JOINS} ORDER BY RANDOM() LIMIT 1"
        );
        conn.query_row(&sql, [], quote_from_row)
            .optional()?
            .ok_or(RepoError::Empty { entity: "quote" })
    }

    fn quote_themes(&self, quote_id: &str) -> RepoResult<Vec<ThemeRow>> {
        self.query_themes(
            &format!(
                "SELECT {THEME_COLUMNS} FROM quote_themes qt
                 JOIN themes th ON th.id = qt.theme_id
                 WHERE qt.quote_id = ?1 ORDER BY th.name, th.id"
            ),
            quote_id,
        )
    }

    fn quote_evidence(&self, quote_id: &str) -> RepoResult<Vec<EvidenceRow>> {
        self.query_evidence(
            &format!(
                "SELECT {EVIDENCE_COLUMNS} FROM quote_evidence qe
                 JOIN evidence e ON e.id = qe.evidence_id
                 WHERE qe.quote_id = ?1 ORDER BY e.title, e.id"
            ),
            Some(quote_id),
        )
    }

    fn search_quotes(&self, text: &str, limit: usize) -> RepoResult<Vec<QuoteRow>> {
        let escaped = escape_fts_query(text);
        if escaped.is_empty() {
            return Ok(Vec::new());
        }
        let limit = limit.min(SEARCH_RESULT_CAP);

        let conn = self.conn()?;
        let sql = format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes_fts
             JOIN quotes q ON q.rowid = quotes_fts.rowid
             {QUOTE_JOINS}
             WHERE quotes_fts MATCH ?1
             ORDER BY quotes_fts.rank LIMIT ?2"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![escaped, limit as i64], quote_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(query = %text, hits = rows.len(), "quote search");
        Ok(rows)
    }

    fn list_philosophers(&self, tradition: Option<&str>) -> RepoResult<Vec<PhilosopherRow>> {
        self.query_philosophers("WHERE (?1 IS NULL OR ph.tradition_id = ?1)", tradition)
    }

    fn get_philosopher(&self, id: &str) -> RepoResult<PhilosopherRow> {
        self.query_philosophers("WHERE ph.id = ?1", Some(id))?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::not_found("philosopher", id))
    }

    fn list_traditions(&self) -> RepoResult<Vec<TraditionRow>> {
        self.query_traditions("WHERE ?1 IS NULL", None)
    }

    fn get_tradition(&self, id: &str) -> RepoResult<TraditionRow> {
        self.query_traditions("WHERE id = ?1", Some(id))?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::not_found("tradition", id))
    }

    fn tradition_related(&self, id: &str) -> RepoResult<Vec<String>> {
        self.query_names(
            "SELECT t.name FROM tradition_relations r
             JOIN traditions t ON t.id = r.related_id
             WHERE r.tradition_id = ?1 ORDER BY t.name, t.id",
            id,
        )
    }

    fn list_themes(&self) -> RepoResult<Vec<ThemeRow>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {THEME_COLUMNS} FROM themes th ORDER BY th.name, th.id"))?;
        let rows = stmt
            .query_map([], theme_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn get_theme(&self, id: &str) -> RepoResult<ThemeRow> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {THEME_COLUMNS} FROM themes th WHERE th.id = ?1"),
            params![id],
            theme_from_row,
        )
        .optional()?
        .ok_or_else(|| RepoError::not_found("theme", id))
    }

    fn theme_traditions(&self, theme_id: &str) -> RepoResult<Vec<String>> {
        self.query_names(
            "SELECT t.name FROM theme_traditions tt
             JOIN traditions t ON t.id = tt.tradition_id
             WHERE tt.theme_id = ?1 ORDER BY t.name, t.id",
            theme_id,
        )
    }

    fn theme_evidence(&self, theme_id: &str) -> RepoResult<Vec<EvidenceRow>> {
        self.query_evidence(
            &format!(
                "SELECT {EVIDENCE_COLUMNS} FROM evidence_themes et
                 JOIN evidence e ON e.id = et.evidence_id
                 WHERE et.theme_id = ?1 ORDER BY e.title, e.id"
            ),
            Some(theme_id),
        )
    }

    fn list_evidence(&self, field: Option<&str>) -> RepoResult<Vec<EvidenceRow>> {
        self.query_evidence(
            &format!(
                "SELECT {EVIDENCE_COLUMNS} FROM evidence e
                 WHERE (?1 IS NULL OR e.field = ?1) ORDER BY e.title, e.id"
            ),
            field,
        )
    }

    fn get_evidence(&self, id: &str) -> RepoResult<EvidenceRow> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {EVIDENCE_COLUMNS} FROM evidence e WHERE e.id = ?1"),
            params![id],
            evidence_from_row,
        )
        .optional()?
        .ok_or_else(|| RepoError::not_found("evidence", id))
    }

    fn evidence_themes(&self, evidence_id: &str) -> RepoResult<Vec<ThemeRow>> {
        self.query_themes(
            &format!(
                "SELECT {THEME_COLUMNS} FROM evidence_themes et
                 JOIN themes th ON th.id = et.theme_id
                 WHERE et.evidence_id = ?1 ORDER BY th.name, th.id"
            ),
            evidence_id,
        )
    }

    fn evidence_quotes(&self, evidence_id: &str) -> RepoResult<Vec<QuoteRow>> {
        self.query_quotes(
            "WHERE EXISTS (SELECT 1 FROM quote_evidence qe
                           WHERE qe.quote_id = q.id AND qe.evidence_id = ?1)",
            params![evidence_id],
        )
    }
}
