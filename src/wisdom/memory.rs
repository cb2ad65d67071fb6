//! In-memory backend: flat maps keyed by id, answered by linear scans.
//!
//! Quotes are kept in a `Vec` so listings come back in insertion order, matching
//! the rowid order of the SQLite backend. After seeding nothing mutates the maps,
//! so shared reads through an `Arc` need no locking.

use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

use crate::error::{RepoError, RepoResult};
use crate::wisdom::dataset::Dataset;
use crate::wisdom::seed::Seedable;
use crate::wisdom::types::{
    DatasetCounts, Evidence, EvidenceRow, Philosopher, PhilosopherRow, Quote, QuoteFilter,
    QuoteRow, Theme, ThemeRow, Tradition, TraditionRow,
};
use crate::wisdom::Repository;

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    traditions: HashMap<String, Tradition>,
    philosophers: HashMap<String, Philosopher>,
    themes: HashMap<String, Theme>,
    evidence: HashMap<String, Evidence>,
    quotes: Vec<Quote>,
    quote_index: HashMap<String, usize>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository already holding `data`.
    pub fn with_dataset(data: &Dataset) -> RepoResult<Self> {
        let mut repo = Self::new();
        repo.load(data)?;
        Ok(repo)
    }

    fn tradition_name(&self, id: &str) -> String {
        self.traditions
            .get(id)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    }

    fn quote_row(&self, q: &Quote) -> QuoteRow {
        QuoteRow {
            id: q.id.clone(),
            slug: q.slug.clone().unwrap_or_default(),
            title: q.title.clone().unwrap_or_default(),
            text: q.text.clone(),
            philosopher_id: q.philosopher_id.clone(),
            philosopher_name: self
                .philosophers
                .get(&q.philosopher_id)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            tradition_id: q.tradition_id.clone(),
            tradition_name: self.tradition_name(&q.tradition_id),
            source: q.source.clone(),
            summary: q.summary.clone().unwrap_or_default(),
        }
    }

    fn philosopher_row(&self, p: &Philosopher) -> PhilosopherRow {
        PhilosopherRow {
            id: p.id.clone(),
            name: p.name.clone(),
            tradition_id: p.tradition_id.clone(),
            tradition_name: self.tradition_name(&p.tradition_id),
            era: p.era.clone(),
            bio: p.bio.clone(),
            key_teachings: p.key_teachings.clone(),
        }
    }

    fn quotes_where(&self, pred: impl Fn(&Quote) -> bool) -> Vec<QuoteRow> {
        self.quotes
            .iter()
            .filter(|q| pred(q))
            .map(|q| self.quote_row(q))
            .collect()
    }

    /// Names of the traditions in `ids` that exist, sorted.
    fn tradition_names(&self, ids: &[String]) -> Vec<String> {
        let mut found: Vec<&Tradition> =
            ids.iter().filter_map(|id| self.traditions.get(id)).collect();
        found.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        found.into_iter().map(|t| t.name.clone()).collect()
    }

    fn theme_rows(&self, ids: &[String]) -> Vec<ThemeRow> {
        let mut rows: Vec<ThemeRow> = ids
            .iter()
            .filter_map(|id| self.themes.get(id))
            .map(ThemeRow::from)
            .collect();
        sort_themes(&mut rows);
        rows
    }

    fn evidence_rows<'a>(&self, items: impl Iterator<Item = &'a Evidence>) -> Vec<EvidenceRow> {
        let mut rows: Vec<EvidenceRow> = items.map(EvidenceRow::from).collect();
        rows.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        rows
    }

    /// Rows whose id is already stored are kept as they are, like `INSERT OR
    /// IGNORE`; their links are still merged in.
    fn insert_all(&mut self, data: &Dataset) -> RepoResult<()> {
        for t in &data.traditions {
            self.traditions.entry(t.id.clone()).or_insert_with(|| Tradition {
                related_ids: Vec::new(),
                ..t.clone()
            });
        }
        for t in &data.traditions {
            for related in &t.related_ids {
                self.require_tradition(related, "tradition relation", &t.id)?;
            }
            if let Some(stored) = self.traditions.get_mut(&t.id) {
                merge_links(&mut stored.related_ids, &t.related_ids);
            }
        }

        for p in &data.philosophers {
            self.require_tradition(&p.tradition_id, "philosopher", &p.id)?;
            self.philosophers
                .entry(p.id.clone())
                .or_insert_with(|| p.clone());
        }

        for t in &data.themes {
            for tid in &t.tradition_ids {
                self.require_tradition(tid, "theme", &t.id)?;
            }
            let stored = self.themes.entry(t.id.clone()).or_insert_with(|| Theme {
                tradition_ids: Vec::new(),
                ..t.clone()
            });
            merge_links(&mut stored.tradition_ids, &t.tradition_ids);
        }

        for e in &data.evidence {
            for tid in &e.theme_ids {
                self.require_theme(tid, "evidence", &e.id)?;
            }
            let stored = self.evidence.entry(e.id.clone()).or_insert_with(|| Evidence {
                theme_ids: Vec::new(),
                ..e.clone()
            });
            merge_links(&mut stored.theme_ids, &e.theme_ids);
        }

        for q in &data.quotes {
            if !self.philosophers.contains_key(&q.philosopher_id) {
                return Err(dangling("quote", &q.id, "philosopher", &q.philosopher_id));
            }
            self.require_tradition(&q.tradition_id, "quote", &q.id)?;
            for tid in &q.theme_ids {
                self.require_theme(tid, "quote", &q.id)?;
            }
            for eid in &q.evidence_ids {
                if !self.evidence.contains_key(eid) {
                    return Err(dangling("quote", &q.id, "evidence", eid));
                }
            }

            let index = match self.quote_index.get(&q.id) {
                Some(&index) => index,
                None => {
                    if let Some(slug) = &q.slug {
                        if self.quotes.iter().any(|other| other.slug.as_ref() == Some(slug)) {
                            return Err(RepoError::Integrity(format!(
                                "quote {} reuses slug {slug}",
                                q.id
                            )));
                        }
                    }
                    self.quote_index.insert(q.id.clone(), self.quotes.len());
                    self.quotes.push(Quote {
                        theme_ids: Vec::new(),
                        evidence_ids: Vec::new(),
                        ..q.clone()
                    });
                    self.quotes.len() - 1
                }
            };
            let stored = &mut self.quotes[index];
            merge_links(&mut stored.theme_ids, &q.theme_ids);
            merge_links(&mut stored.evidence_ids, &q.evidence_ids);
        }

        Ok(())
    }

    fn require_tradition(&self, id: &str, owner: &str, owner_id: &str) -> RepoResult<()> {
        if self.traditions.contains_key(id) {
            Ok(())
        } else {
            Err(dangling(owner, owner_id, "tradition", id))
        }
    }

    fn require_theme(&self, id: &str, owner: &str, owner_id: &str) -> RepoResult<()> {
        if self.themes.contains_key(id) {
            Ok(())
        } else {
            Err(dangling(owner, owner_id, "theme", id))
        }
    }
}

fn dangling(owner: &str, owner_id: &str, target: &str, target_id: &str) -> RepoError {
    RepoError::Integrity(format!("{owner} {owner_id} references unknown {target} {target_id}"))
}

/// Append links not already present, keeping first-seen order.
fn merge_links(stored: &mut Vec<String>, incoming: &[String]) {
    let mut seen: HashSet<String> = stored.iter().cloned().collect();
    for id in incoming {
        if seen.insert(id.clone()) {
            stored.push(id.clone());
        }
    }
}

fn sort_themes(rows: &mut [ThemeRow]) {
    rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

impl Seedable for MemoryRepository {
    fn load(&mut self, data: &Dataset) -> RepoResult<()> {
        // Build on a copy so a failed load leaves the live maps untouched.
        let mut staged = self.clone();
        staged.insert_all(data)?;
        *self = staged;
        Ok(())
    }
}

impl Repository for MemoryRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn counts(&self) -> RepoResult<DatasetCounts> {
        Ok(DatasetCounts {
            traditions: self.traditions.len() as u64,
            philosophers: self.philosophers.len() as u64,
            themes: self.themes.len() as u64,
            evidence: self.evidence.len() as u64,
            quotes: self.quotes.len() as u64,
        })
    }

    fn list_quotes(&self, filter: &QuoteFilter) -> RepoResult<Vec<QuoteRow>> {
        Ok(self.quotes_where(|q| {
            filter
                .philosopher
                .as_ref()
                .map_or(true, |p| &q.philosopher_id == p)
                && filter
                    .tradition
                    .as_ref()
                    .map_or(true, |t| &q.tradition_id == t)
                && filter
                    .theme
                    .as_ref()
                    .map_or(true, |t| q.theme_ids.contains(t))
        }))
    }

    fn get_quote(&self, id_or_slug: &str) -> RepoResult<QuoteRow> {
        self.quote_index
            .get(id_or_slug)
            .map(|&i| &self.quotes[i])
            .or_else(|| {
                self.quotes
                    .iter()
                    .find(|q| q.slug.as_deref() == Some(id_or_slug))
            })
            .map(|q| self.quote_row(q))
            .ok_or_else(|| RepoError::not_found("quote", id_or_slug))
    }

    fn random_quote(&self) -> RepoResult<QuoteRow> {
        self.quotes
            .choose(&mut rand::thread_rng())
            .map(|q| self.quote_row(q))
            .ok_or(RepoError::Empty { entity: "quote" })
    }

    fn quote_themes(&self, quote_id: &str) -> RepoResult<Vec<ThemeRow>> {
        Ok(self
            .quote_index
            .get(quote_id)
            .map(|&i| self.theme_rows(&self.quotes[i].theme_ids))
            .unwrap_or_default())
    }

    fn quote_evidence(&self, quote_id: &str) -> RepoResult<Vec<EvidenceRow>> {
        Ok(self
            .quote_index
            .get(quote_id)
            .map(|&i| {
                self.evidence_rows(
                    self.quotes[i]
                        .evidence_ids
                        .iter()
                        .filter_map(|id| self.evidence.get(id)),
                )
            })
            .unwrap_or_default())
    }

    fn list_philosophers(&self, tradition: Option<&str>) -> RepoResult<Vec<PhilosopherRow>> {
        let mut rows: Vec<PhilosopherRow> = self
            .philosophers
            .values()
            .filter(|p| tradition.map_or(true, |t| p.tradition_id == t))
            .map(|p| self.philosopher_row(p))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    fn get_philosopher(&self, id: &str) -> RepoResult<PhilosopherRow> {
        self.philosophers
            .get(id)
            .map(|p| self.philosopher_row(p))
            .ok_or_else(|| RepoError::not_found("philosopher", id))
    }

    fn list_traditions(&self) -> RepoResult<Vec<TraditionRow>> {
        let mut rows: Vec<TraditionRow> = self.traditions.values().map(TraditionRow::from).collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    fn get_tradition(&self, id: &str) -> RepoResult<TraditionRow> {
        self.traditions
            .get(id)
            .map(TraditionRow::from)
            .ok_or_else(|| RepoError::not_found("tradition", id))
    }

    fn tradition_related(&self, id: &str) -> RepoResult<Vec<String>> {
        Ok(self
            .traditions
            .get(id)
            .map(|t| self.tradition_names(&t.related_ids))
            .unwrap_or_default())
    }

    fn list_themes(&self) -> RepoResult<Vec<ThemeRow>> {
        let mut rows: Vec<ThemeRow> = self.themes.values().map(ThemeRow::from).collect();
        sort_themes(&mut rows);
        Ok(rows)
    }

    fn get_theme(&self, id: &str) -> RepoResult<ThemeRow> {
        self.themes
            .get(id)
            .map(ThemeRow::from)
            .ok_or_else(|| RepoError::not_found("theme", id))
    }

    fn theme_traditions(&self, theme_id: &str) -> RepoResult<Vec<String>> {
        Ok(self
            .themes
            .get(theme_id)
            .map(|t| self.tradition_names(&t.tradition_ids))
            .unwrap_or_default())
    }

    fn theme_evidence(&self, theme_id: &str) -> RepoResult<Vec<EvidenceRow>> {
        Ok(self.evidence_rows(
            self.evidence
                .values()
                .filter(|e| e.theme_ids.iter().any(|t| t == theme_id)),
        ))
    }

    fn list_evidence(&self, field: Option<&str>) -> RepoResult<Vec<EvidenceRow>> {
        Ok(self.evidence_rows(
            self.evidence
                .values()
                .filter(|e| field.map_or(true, |f| e.field == f)),
        ))
    }

    fn get_evidence(&self, id: &str) -> RepoResult<EvidenceRow> {
        self.evidence
            .get(id)
            .map(EvidenceRow::from)
            .ok_or_else(|| RepoError::not_found("evidence", id))
    }

    fn evidence_themes(&self, evidence_id: &str) -> RepoResult<Vec<ThemeRow>> {
        Ok(self
            .evidence
            .get(evidence_id)
            .map(|e| self.theme_rows(&e.theme_ids))
            .unwrap_or_default())
    }

    fn evidence_quotes(&self, evidence_id: &str) -> RepoResult<Vec<QuoteRow>> {
        Ok(self.quotes_where(|q| q.evidence_ids.iter().any(|e| e == evidence_id)))
    }
}
