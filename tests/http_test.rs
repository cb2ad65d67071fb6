mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use perennial::web::{self, AppState};
use perennial::wisdom::dataset;

fn memory_app() -> Router {
    let repo = helpers::memory_repo(dataset::reference());
    web::router(AppState::new(Arc::new(repo), 50))
}

fn sqlite_app() -> Router {
    let repo = helpers::sqlite_repo(dataset::reference());
    web::router(AppState::new(Arc::new(repo), 50))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn health_reports_backend_and_counts() {
    let (status, json) = get_json(memory_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["backend"], "memory");
    assert_eq!(json["counts"]["quotes"], 26);
    assert_eq!(json["motto"], "The obstacle is the way.");
}

#[tokio::test]
async fn quote_list_has_count_and_filters() {
    for app in [memory_app(), sqlite_app()] {
        let (status, json) = get_json(app.clone(), "/api/quotes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 26);
        assert_eq!(json["quotes"].as_array().unwrap().len(), 26);

        let (_, json) = get_json(app.clone(), "/api/quotes?philosopher=epictetus").await;
        assert_eq!(json["count"], 6);

        // Empty filter values mean no filter.
        let (_, json) = get_json(app.clone(), "/api/quotes?philosophy=&theme=").await;
        assert_eq!(json["count"], 26);

        let (_, json) = get_json(app, "/api/quotes?philosophy=taoist").await;
        let ids: Vec<&str> = json["quotes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["lt1", "lt2"]);
    }
}

#[tokio::test]
async fn quote_detail_includes_themes_and_evidence() {
    let (status, json) = get_json(sqlite_app(), "/api/quotes/e1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["quote"]["philosopher_name"], "Epictetus");
    assert_eq!(json["quote"]["tradition_name"], "Stoicism");
    assert_eq!(json["themes"].as_array().unwrap().len(), 2);
    assert_eq!(json["evidence"][0]["id"], "cognitive-reappraisal");
}

#[tokio::test]
async fn older_clients_keep_their_keys() {
    for app in [memory_app(), sqlite_app()] {
        let (_, json) = get_json(app.clone(), "/api/quotes/e1").await;
        assert_eq!(json["philosopher"], "Epictetus");
        assert_eq!(json["philosophy"], "Stoicism");

        let (_, json) = get_json(app.clone(), "/api/quotes/random").await;
        assert!(json["philosopher"].is_string());
        assert!(json["philosophy"].is_string());

        let (_, json) = get_json(app.clone(), "/api/philosophers/epictetus").await;
        assert_eq!(json["philosophy"], "Stoicism");

        let (_, json) = get_json(app.clone(), "/api/themes/control").await;
        assert_eq!(json["philosophies"], json["traditions"]);

        let (_, json) = get_json(app, "/api/philosophies").await;
        assert_eq!(json["philosophies"].as_array().unwrap().len(), 9);
    }
}

#[tokio::test]
async fn filter_values_are_not_trimmed() {
    for app in [memory_app(), sqlite_app()] {
        let (_, json) = get_json(app.clone(), "/api/quotes?philosopher=%20epictetus").await;
        assert_eq!(json["count"], 0);

        let (_, json) = get_json(app, "/api/quotes?philosopher=%20%20").await;
        assert_eq!(json["count"], 26);
    }
}

#[tokio::test]
async fn unknown_ids_are_404() {
    for app in [memory_app(), sqlite_app()] {
        for uri in [
            "/api/quotes/nonexistent-id",
            "/api/philosophers/plato",
            "/api/traditions/zoroastrian",
            "/api/philosophies/zoroastrian",
            "/api/themes/love",
            "/api/evidence/fmri",
        ] {
            let (status, json) = get_json(app.clone(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(json["error"].as_str().unwrap().contains("not found"), "{uri}");
        }
    }
}

#[tokio::test]
async fn random_quote_is_served() {
    let (status, json) = get_json(memory_app(), "/api/quotes/random").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["quote"]["id"].is_string());
}

#[tokio::test]
async fn random_quote_on_empty_store_is_404() {
    let repo = helpers::memory_repo(&Default::default());
    let app = web::router(AppState::new(Arc::new(repo), 50));
    let (status, json) = get_json(app, "/api/quotes/random").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "no quote available");
}

#[tokio::test]
async fn search_depends_on_backend() {
    let (status, json) = get_json(sqlite_app(), "/api/quotes/search?q=hurry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["quotes"][0]["id"], "lt1");

    let (status, json) = get_json(sqlite_app(), "/api/quotes/search?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);

    let (status, _) = get_json(memory_app(), "/api/quotes/search?q=hurry").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn tradition_detail_and_alias_agree() {
    let app = sqlite_app();
    let (_, a) = get_json(app.clone(), "/api/traditions/stoic").await;
    let (_, b) = get_json(app.clone(), "/api/philosophies/stoic").await;
    assert_eq!(a, b);
    assert_eq!(a["tradition"]["name"], "Stoicism");
    assert!(a["philosophers"].as_array().unwrap().len() >= 2);

    let (_, list) = get_json(app, "/api/philosophies").await;
    assert_eq!(list["count"], 9);
}

#[tokio::test]
async fn philosophers_filter_by_tradition() {
    let (_, json) = get_json(memory_app(), "/api/philosophers?tradition=stoic").await;
    let traditions: Vec<&str> = json["philosophers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["tradition_id"].as_str().unwrap())
        .collect();
    assert!(!traditions.is_empty());
    assert!(traditions.iter().all(|t| *t == "stoic"));
    assert!(json["philosophers"][0]["key_teachings"].is_array());
}

#[tokio::test]
async fn theme_and_evidence_details() {
    let app = memory_app();
    let (status, json) = get_json(app.clone(), "/api/themes/control").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["traditions"].as_array().unwrap().iter().all(|t| t.is_string()));
    assert!(!json["quotes"].as_array().unwrap().is_empty());

    let (status, json) = get_json(app.clone(), "/api/evidence/cognitive-reappraisal").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!json["themes"].as_array().unwrap().is_empty());

    let (_, json) = get_json(app, "/api/evidence?field=neuroscience").await;
    assert!(json["evidence"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["field"] == "neuroscience"));
}

#[tokio::test]
async fn pages_render_html() {
    let app = sqlite_app();
    for uri in [
        "/",
        "/pages/quotes?tradition=stoic",
        "/pages/philosophers",
        "/pages/philosophers/epictetus",
        "/pages/traditions",
        "/pages/traditions/taoist",
        "/pages/philosophies",
        "/pages/philosophies/taoist",
        "/pages/themes",
        "/pages/themes/control",
        "/pages/evidence",
        "/pages/evidence/cognitive-reappraisal",
    ] {
        let (status, content_type, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(content_type.starts_with("text/html"), "{uri}");
        assert!(body.starts_with("<!DOCTYPE html>"), "{uri}");
    }
}

#[tokio::test]
async fn random_quote_partial_is_a_fragment() {
    let (status, _, body) = get(memory_app(), "/partials/random-quote").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"<div id="random-quote">"#));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn missing_page_is_html_404() {
    let (status, content_type, body) = get(memory_app(), "/pages/themes/love").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("theme not found: love"));
}
