#![allow(dead_code)]

use perennial::db;
use perennial::wisdom::dataset::Dataset;
use perennial::wisdom::memory::MemoryRepository;
use perennial::wisdom::seed;
use perennial::wisdom::sqlite::SqliteRepository;
use perennial::wisdom::types::{Evidence, Philosopher, Quote, Theme, Tradition};
use perennial::wisdom::Repository;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn quote(id: &str, philosopher_id: &str, tradition_id: &str, themes: &[&str]) -> Quote {
    Quote {
        id: id.into(),
        slug: None,
        title: None,
        text: format!("Text of {id}"),
        philosopher_id: philosopher_id.into(),
        tradition_id: tradition_id.into(),
        source: "Fragments".into(),
        summary: None,
        theme_ids: strings(themes),
        evidence_ids: Vec::new(),
    }
}

/// Two traditions (stoic related to buddhist), two philosophers, two themes, one
/// evidence item on `control`, three quotes.
pub fn scenario() -> Dataset {
    let mut q1 = quote("q1", "epictetus", "stoic", &["control"]);
    q1.evidence_ids = strings(&["reappraisal"]);
    q1.slug = Some("react-not-happen".into());

    Dataset {
        traditions: vec![
            Tradition {
                id: "stoic".into(),
                name: "Stoicism".into(),
                origin: "Athens, c. 300 BCE".into(),
                core_principles: strings(&["Dichotomy of control", "Virtue is sufficient"]),
                related_ids: strings(&["buddhist"]),
            },
            Tradition {
                id: "buddhist".into(),
                name: "Buddhism".into(),
                origin: "India, c. 500 BCE".into(),
                core_principles: strings(&["Four Noble Truths"]),
                related_ids: Vec::new(),
            },
        ],
        philosophers: vec![
            Philosopher {
                id: "epictetus".into(),
                name: "Epictetus".into(),
                tradition_id: "stoic".into(),
                era: "c. 50-135 CE".into(),
                bio: "Former slave turned teacher.".into(),
                key_teachings: strings(&["Dichotomy of control"]),
            },
            Philosopher {
                id: "buddha".into(),
                name: "Siddhartha Gautama".into(),
                tradition_id: "buddhist".into(),
                era: "c. 563-483 BCE".into(),
                bio: "Founder of Buddhism.".into(),
                key_teachings: strings(&["Impermanence", "Non-attachment"]),
            },
        ],
        themes: vec![
            Theme {
                id: "control".into(),
                name: "Control".into(),
                description: "What is up to us.".into(),
                tradition_ids: strings(&["stoic"]),
            },
            Theme {
                id: "impermanence".into(),
                name: "Impermanence".into(),
                description: "All things pass.".into(),
                tradition_ids: strings(&["buddhist", "stoic"]),
            },
        ],
        evidence: vec![Evidence {
            id: "reappraisal".into(),
            title: "Cognitive Reappraisal".into(),
            finding: "Reframing lowers amygdala response.".into(),
            field: "neuroscience".into(),
            source: "Ochsner & Gross (2005)".into(),
            theme_ids: strings(&["control"]),
        }],
        quotes: vec![
            q1,
            quote("q2", "epictetus", "stoic", &["control", "impermanence"]),
            quote("q3", "buddha", "buddhist", &["impermanence"]),
        ],
    }
}

pub fn memory_repo(data: &Dataset) -> MemoryRepository {
    let mut repo = MemoryRepository::new();
    seed::seed(&mut repo, data).unwrap();
    repo
}

pub fn sqlite_repo(data: &Dataset) -> SqliteRepository {
    let mut repo = SqliteRepository::new(db::open_memory_database().unwrap());
    seed::seed(&mut repo, data).unwrap();
    repo
}

/// Both backends, seeded with the same data.
pub fn backends(data: &Dataset) -> Vec<Box<dyn Repository>> {
    vec![Box::new(memory_repo(data)), Box::new(sqlite_repo(data))]
}

/// Project one string field out of each row, for order-sensitive comparisons.
pub fn ids<T>(rows: &[T], field: impl Fn(&T) -> String) -> Vec<String> {
    rows.iter().map(field).collect()
}
