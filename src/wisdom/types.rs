//! Entity and row type definitions.
//!
//! The entity types ([`Tradition`], [`Philosopher`], [`Theme`], [`Evidence`],
//! [`Quote`]) describe the reference content as it is seeded. The row types are
//! what queries return: flat, with owning names resolved and list columns decoded.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A school of thought, e.g. Stoicism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tradition {
    pub id: String,
    pub name: String,
    pub origin: String,
    /// Ordered core principles.
    pub core_principles: Vec<String>,
    /// Related tradition ids. Stored directionally.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_ids: Vec<String>,
}

/// An individual teacher, owned by exactly one tradition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Philosopher {
    pub id: String,
    pub name: String,
    pub tradition_id: String,
    pub era: String,
    pub bio: String,
    pub key_teachings: Vec<String>,
}

/// A topic addressed across traditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tradition_ids: Vec<String>,
}

/// An empirical finding that supports one or more themes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    pub title: String,
    pub finding: String,
    /// Free-text category: "neuroscience", "neuropsychology", "psychology".
    pub field: String,
    pub source: String,
    pub theme_ids: Vec<String>,
}

/// An attributed statement, the central queryable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    /// Alternate lookup key accepted by `get_quote`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub philosopher_id: String,
    /// Denormalized; expected to match the philosopher's own tradition.
    pub tradition_id: String,
    pub source: String,
    /// Short exposition of the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub theme_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence_ids: Vec<String>,
}

// ── Query rows ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRow {
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub text: String,
    pub philosopher_id: String,
    pub philosopher_name: String,
    pub tradition_id: String,
    pub tradition_name: String,
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhilosopherRow {
    pub id: String,
    pub name: String,
    pub tradition_id: String,
    pub tradition_name: String,
    pub era: String,
    pub bio: String,
    pub key_teachings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraditionRow {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub core_principles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeRow {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceRow {
    pub id: String,
    pub title: String,
    pub finding: String,
    pub field: String,
    pub source: String,
}

impl From<&Tradition> for TraditionRow {
    fn from(t: &Tradition) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            origin: t.origin.clone(),
            core_principles: t.core_principles.clone(),
        }
    }
}

impl From<&Theme> for ThemeRow {
    fn from(t: &Theme) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            description: t.description.clone(),
        }
    }
}

impl From<&Evidence> for EvidenceRow {
    fn from(e: &Evidence) -> Self {
        Self {
            id: e.id.clone(),
            title: e.title.clone(),
            finding: e.finding.clone(),
            field: e.field.clone(),
            source: e.source.clone(),
        }
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Optional equality filters for quote listings. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    pub philosopher: Option<String>,
    pub tradition: Option<String>,
    /// Matches quotes whose theme set contains this id.
    pub theme: Option<String>,
}

impl QuoteFilter {
    pub fn by_philosopher(id: impl Into<String>) -> Self {
        Self {
            philosopher: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_tradition(id: impl Into<String>) -> Self {
        Self {
            tradition: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn by_theme(id: impl Into<String>) -> Self {
        Self {
            theme: Some(id.into()),
            ..Self::default()
        }
    }

    /// Build from request query parameters. Recognized keys are `philosopher` /
    /// `philosopher_id`, `philosophy` / `tradition` / `philosophy_id` /
    /// `tradition_id`, and `theme` / `theme_id`. Empty values mean "no filter".
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            philosopher: first_param(params, &["philosopher", "philosopher_id"]),
            tradition: tradition_param(params),
            theme: first_param(params, &["theme", "theme_id"]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.philosopher.is_none() && self.tradition.is_none() && self.theme.is_none()
    }
}

/// Tradition filter for philosopher listings, from the same keys as [`QuoteFilter`].
pub fn tradition_param(params: &HashMap<String, String>) -> Option<String> {
    first_param(
        params,
        &["tradition", "philosophy", "tradition_id", "philosophy_id"],
    )
}

/// Evidence `field` filter.
pub fn field_param(params: &HashMap<String, String>) -> Option<String> {
    first_param(params, &["field"])
}

/// First non-blank value among `keys`, in order, matched exactly as given.
fn first_param(params: &HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| params.get(*k))
        .find(|v| !v.trim().is_empty())
        .cloned()
}

/// Row counts per entity table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetCounts {
    pub traditions: u64,
    pub philosophers: u64,
    pub themes: u64,
    pub evidence: u64,
    pub quotes: u64,
}
