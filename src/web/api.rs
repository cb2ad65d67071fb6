//! JSON handlers. List endpoints answer `{ "<plural>": [...], "count": n }`.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::{blocking, AppState, WebError};
use crate::wisdom::types::{field_param, tradition_param, QuoteFilter, QuoteRow};
use crate::wisdom::Repository;

type ApiResult = Result<Json<Value>, WebError>;

type Params = Query<HashMap<String, String>>;

pub async fn health(State(state): State<AppState>) -> ApiResult {
    let backend = state.repo.backend();
    let counts = blocking(&state, |repo| repo.counts()).await?;
    Ok(Json(json!({
        "status": "ok",
        "project": "Perennial Wisdom API",
        "motto": "The obstacle is the way.",
        "backend": backend,
        "counts": counts,
    })))
}

// ── Quotes ──

pub async fn list_quotes(State(state): State<AppState>, Query(params): Params) -> ApiResult {
    let filter = QuoteFilter::from_params(&params);
    let quotes = blocking(&state, move |repo| repo.list_quotes(&filter)).await?;
    Ok(Json(json!({ "count": quotes.len(), "quotes": quotes })))
}

pub async fn get_quote(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let detail = blocking(&state, move |repo| {
        let quote = repo.get_quote(&id)?;
        quote_detail(repo, quote)
    })
    .await?;
    Ok(Json(detail))
}

pub async fn random_quote(State(state): State<AppState>) -> ApiResult {
    let detail = blocking(&state, |repo| {
        let quote = repo.random_quote()?;
        quote_detail(repo, quote)
    })
    .await?;
    Ok(Json(detail))
}

/// A quote with its themes and evidence. The top-level `philosopher` and
/// `philosophy` names are kept for older clients.
fn quote_detail(repo: &dyn Repository, quote: QuoteRow) -> crate::error::RepoResult<Value> {
    let themes = repo.quote_themes(&quote.id)?;
    let evidence = repo.quote_evidence(&quote.id)?;
    Ok(json!({
        "philosopher": quote.philosopher_name,
        "philosophy": quote.tradition_name,
        "quote": quote,
        "themes": themes,
        "evidence": evidence,
    }))
}

pub async fn search_quotes(State(state): State<AppState>, Query(params): Params) -> ApiResult {
    let query = params.get("q").map(|q| q.trim().to_string()).unwrap_or_default();
    let limit = state.search_limit;
    let text = query.clone();
    let quotes = blocking(&state, move |repo| repo.search_quotes(&text, limit)).await?;
    Ok(Json(json!({ "query": query, "count": quotes.len(), "quotes": quotes })))
}

// ── Philosophers ──

pub async fn list_philosophers(State(state): State<AppState>, Query(params): Params) -> ApiResult {
    let tradition = tradition_param(&params);
    let philosophers =
        blocking(&state, move |repo| repo.list_philosophers(tradition.as_deref())).await?;
    Ok(Json(json!({ "count": philosophers.len(), "philosophers": philosophers })))
}

pub async fn get_philosopher(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let (philosopher, quotes) = blocking(&state, move |repo| {
        let philosopher = repo.get_philosopher(&id)?;
        let quotes = repo.philosopher_quotes(&id)?;
        Ok((philosopher, quotes))
    })
    .await?;
    Ok(Json(json!({
        "philosophy": philosopher.tradition_name,
        "philosopher": philosopher,
        "quotes": quotes,
    })))
}

// ── Traditions ──

pub async fn list_traditions(State(state): State<AppState>) -> ApiResult {
    let traditions = blocking(&state, |repo| repo.list_traditions()).await?;
    Ok(Json(json!({ "count": traditions.len(), "traditions": traditions })))
}

/// `/api/philosophies`: the tradition list under its older name.
pub async fn list_philosophies(State(state): State<AppState>) -> ApiResult {
    let traditions = blocking(&state, |repo| repo.list_traditions()).await?;
    Ok(Json(json!({ "count": traditions.len(), "philosophies": traditions })))
}

pub async fn get_tradition(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let detail = blocking(&state, move |repo| {
        let tradition = repo.get_tradition(&id)?;
        Ok(json!({
            "tradition": tradition,
            "related": repo.tradition_related(&id)?,
            "philosophers": repo.tradition_philosophers(&id)?,
            "quotes": repo.tradition_quotes(&id)?,
        }))
    })
    .await?;
    Ok(Json(detail))
}

// ── Themes ──

pub async fn list_themes(State(state): State<AppState>) -> ApiResult {
    let themes = blocking(&state, |repo| repo.list_themes()).await?;
    Ok(Json(json!({ "count": themes.len(), "themes": themes })))
}

pub async fn get_theme(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let detail = blocking(&state, move |repo| {
        let theme = repo.get_theme(&id)?;
        let traditions = repo.theme_traditions(&id)?;
        Ok(json!({
            "theme": theme,
            "philosophies": traditions,
            "traditions": traditions,
            "quotes": repo.theme_quotes(&id)?,
            "evidence": repo.theme_evidence(&id)?,
        }))
    })
    .await?;
    Ok(Json(detail))
}

// ── Evidence ──

pub async fn list_evidence(State(state): State<AppState>, Query(params): Params) -> ApiResult {
    let field = field_param(&params);
    let evidence = blocking(&state, move |repo| repo.list_evidence(field.as_deref())).await?;
    Ok(Json(json!({ "count": evidence.len(), "evidence": evidence })))
}

pub async fn get_evidence(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let detail = blocking(&state, move |repo| {
        let evidence = repo.get_evidence(&id)?;
        Ok(json!({
            "evidence": evidence,
            "themes": repo.evidence_themes(&id)?,
            "quotes": repo.evidence_quotes(&id)?,
        }))
    })
    .await?;
    Ok(Json(detail))
}
