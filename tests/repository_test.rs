mod helpers;

use perennial::error::ErrorKind;
use perennial::wisdom::types::QuoteFilter;

#[test]
fn scenario_filters_and_joins() {
    for repo in helpers::backends(&helpers::scenario()) {
        let backend = repo.backend();

        let all = repo.list_quotes(&QuoteFilter::default()).unwrap();
        assert_eq!(all.len(), 3, "{backend}");

        let by_epictetus = repo.list_quotes(&QuoteFilter::by_philosopher("epictetus")).unwrap();
        assert_eq!(by_epictetus.len(), 2, "{backend}");

        let by_control = repo.list_quotes(&QuoteFilter::by_theme("control")).unwrap();
        assert_eq!(by_control.len(), 2, "{backend}");

        let epictetus = repo.get_philosopher("epictetus").unwrap();
        assert_eq!(epictetus.tradition_name, "Stoicism", "{backend}");

        assert_eq!(repo.tradition_related("stoic").unwrap(), vec!["Buddhism"], "{backend}");
    }
}

#[test]
fn filters_are_conjunctive() {
    for repo in helpers::backends(&helpers::scenario()) {
        let filter = QuoteFilter {
            philosopher: Some("epictetus".into()),
            tradition: None,
            theme: Some("impermanence".into()),
        };
        let quotes = repo.list_quotes(&filter).unwrap();
        assert_eq!(helpers::ids(&quotes, |q| q.id.clone()), vec!["q2"], "{}", repo.backend());

        let none = repo
            .list_quotes(&QuoteFilter {
                philosopher: Some("buddha".into()),
                tradition: Some("stoic".into()),
                theme: None,
            })
            .unwrap();
        assert!(none.is_empty());
    }
}

#[test]
fn quote_rows_carry_owner_names() {
    for repo in helpers::backends(&helpers::scenario()) {
        let q = repo.get_quote("q3").unwrap();
        assert_eq!(q.philosopher_name, "Siddhartha Gautama");
        assert_eq!(q.tradition_name, "Buddhism");
        assert_eq!(q.slug, "");
        assert_eq!(q.summary, "");
    }
}

#[test]
fn get_quote_accepts_slug() {
    for repo in helpers::backends(&helpers::scenario()) {
        let q = repo.get_quote("react-not-happen").unwrap();
        assert_eq!(q.id, "q1", "{}", repo.backend());
    }
}

#[test]
fn missing_entities_are_not_found() {
    for repo in helpers::backends(&helpers::scenario()) {
        let backend = repo.backend();
        let err = repo.get_quote("nonexistent-id").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{backend}");
        assert!(repo.get_philosopher("plato").unwrap_err().is_not_found());
        assert!(repo.get_tradition("sufi").unwrap_err().is_not_found());
        assert!(repo.get_theme("love").unwrap_err().is_not_found());
        assert!(repo.get_evidence("fmri").unwrap_err().is_not_found());
    }
}

#[test]
fn related_queries_on_unknown_parents_are_empty() {
    for repo in helpers::backends(&helpers::scenario()) {
        assert!(repo.tradition_related("sufi").unwrap().is_empty());
        assert!(repo.tradition_related("buddhist").unwrap().is_empty());
        assert!(repo.tradition_philosophers("sufi").unwrap().is_empty());
        assert!(repo.theme_traditions("love").unwrap().is_empty());
        assert!(repo.theme_evidence("impermanence").unwrap().is_empty());
        assert!(repo.quote_evidence("q3").unwrap().is_empty());
        assert!(repo.evidence_quotes("fmri").unwrap().is_empty());
        assert!(repo.philosopher_quotes("plato").unwrap().is_empty());
    }
}

#[test]
fn relation_lists_are_sorted_by_name() {
    for repo in helpers::backends(&helpers::scenario()) {
        let backend = repo.backend();
        assert_eq!(
            repo.theme_traditions("impermanence").unwrap(),
            vec!["Buddhism", "Stoicism"],
            "{backend}"
        );
        let themes = repo.quote_themes("q2").unwrap();
        assert_eq!(helpers::ids(&themes, |t| t.name.clone()), vec!["Control", "Impermanence"]);

        let traditions = repo.list_traditions().unwrap();
        assert_eq!(helpers::ids(&traditions, |t| t.id.clone()), vec!["buddhist", "stoic"]);
        assert_eq!(traditions[1].core_principles.len(), 2);

        let philosophers = repo.list_philosophers(None).unwrap();
        assert_eq!(helpers::ids(&philosophers, |p| p.id.clone()), vec!["epictetus", "buddha"]);
    }
}

#[test]
fn evidence_links_both_ways() {
    for repo in helpers::backends(&helpers::scenario()) {
        let quotes = repo.evidence_quotes("reappraisal").unwrap();
        assert_eq!(helpers::ids(&quotes, |q| q.id.clone()), vec!["q1"]);

        let themes = repo.evidence_themes("reappraisal").unwrap();
        assert_eq!(helpers::ids(&themes, |t| t.id.clone()), vec!["control"]);

        let evidence = repo.theme_evidence("control").unwrap();
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].field, "neuroscience");

        assert_eq!(repo.list_evidence(Some("neuroscience")).unwrap().len(), 1);
        assert!(repo.list_evidence(Some("psychology")).unwrap().is_empty());
    }
}

#[test]
fn random_quote_is_a_member() {
    for repo in helpers::backends(&helpers::scenario()) {
        let all = repo.list_quotes(&QuoteFilter::default()).unwrap();
        for _ in 0..10 {
            let q = repo.random_quote().unwrap();
            assert!(all.contains(&q), "{}", repo.backend());
        }
    }
}

#[test]
fn random_quote_on_empty_store_is_not_found() {
    let empty = perennial::wisdom::dataset::Dataset::default();
    for repo in helpers::backends(&empty) {
        let err = repo.random_quote().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{}", repo.backend());
    }
}

#[test]
fn counts_match_seeded_data() {
    let data = helpers::scenario();
    for repo in helpers::backends(&data) {
        assert_eq!(repo.counts().unwrap(), data.counts(), "{}", repo.backend());
    }
}
