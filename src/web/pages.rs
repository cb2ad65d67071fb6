//! Server-rendered pages and the random-quote partial.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::collections::HashMap;
use std::fmt::Write;

use super::html::{self, text};
use super::{blocking, AppState, WebError};
use crate::wisdom::types::{field_param, QuoteFilter};

type PageResult = Result<Html<String>, PageError>;

type Params = Query<HashMap<String, String>>;

/// [`WebError`] rendered as an HTML page instead of JSON.
pub struct PageError(WebError);

impl From<WebError> for PageError {
    fn from(err: WebError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = if status == StatusCode::NOT_FOUND {
            self.0.to_string()
        } else {
            tracing::error!(error = %self.0, "page render failed");
            "Something went wrong.".to_string()
        };
        let title = status.canonical_reason().unwrap_or("Error");
        let body = format!(r#"<p class="muted">{}</p>"#, text(&message));
        (status, Html(html::page(title, &body))).into_response()
    }
}

pub async fn home(State(state): State<AppState>) -> PageResult {
    let (quote, traditions) = blocking(&state, |repo| {
        let quote = match repo.random_quote() {
            Ok(q) => Some(q),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };
        Ok((quote, repo.list_traditions()?))
    })
    .await?;

    let mut body = String::new();
    body.push_str(r#"<p class="muted">The obstacle is the way.</p>"#);
    match quote {
        Some(q) => body.push_str(&html::random_quote_fragment(&q)),
        None => body.push_str(r#"<div id="random-quote"><p class="muted">No quotes yet.</p></div>"#),
    }
    body.push_str(
        r##"<button hx-get="/partials/random-quote" hx-target="#random-quote" hx-swap="outerHTML">Another</button>"##,
    );
    body.push_str("<h2>Traditions</h2>");
    body.push_str(&html::tradition_list(&traditions));
    Ok(Html(html::page("Perennial Wisdom", &body)))
}

/// Bare fragment, no layout.
pub async fn random_quote_partial(State(state): State<AppState>) -> PageResult {
    let quote = blocking(&state, |repo| repo.random_quote()).await?;
    Ok(Html(html::random_quote_fragment(&quote)))
}

pub async fn quotes(State(state): State<AppState>, Query(params): Params) -> PageResult {
    let filter = QuoteFilter::from_params(&params);
    let current = filter.clone();
    let (quotes, traditions, themes) = blocking(&state, move |repo| {
        Ok((
            repo.list_quotes(&filter)?,
            repo.list_traditions()?,
            repo.list_themes()?,
        ))
    })
    .await?;

    let tradition_options: Vec<(String, String)> =
        traditions.into_iter().map(|t| (t.id, t.name)).collect();
    let theme_options: Vec<(String, String)> = themes.into_iter().map(|t| (t.id, t.name)).collect();

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<form method="get" action="/pages/quotes">{} {} <button type="submit">Filter</button></form>"#,
        html::select("tradition", &tradition_options, current.tradition.as_deref()),
        html::select("theme", &theme_options, current.theme.as_deref()),
    );
    let _ = write!(body, r#"<p class="muted">{} quotes</p>"#, quotes.len());
    body.push_str(&html::quote_list(&quotes));
    Ok(Html(html::page("Quotes", &body)))
}

pub async fn philosophers(State(state): State<AppState>) -> PageResult {
    let philosophers = blocking(&state, |repo| repo.list_philosophers(None)).await?;
    Ok(Html(html::page(
        "Philosophers",
        &html::philosopher_list(&philosophers),
    )))
}

pub async fn philosopher_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult {
    let (philosopher, quotes) = blocking(&state, move |repo| {
        Ok((repo.get_philosopher(&id)?, repo.philosopher_quotes(&id)?))
    })
    .await?;

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<p class="muted"><a href="/pages/traditions/{}">{}</a> · {}</p><p>{}</p>"#,
        html::attr(&philosopher.tradition_id),
        text(&philosopher.tradition_name),
        text(&philosopher.era),
        text(&philosopher.bio),
    );
    body.push_str("<h2>Key teachings</h2>");
    body.push_str(&html::bullets(&philosopher.key_teachings));
    body.push_str("<h2>Quotes</h2>");
    body.push_str(&html::quote_list(&quotes));
    Ok(Html(html::page(&philosopher.name, &body)))
}

pub async fn traditions(State(state): State<AppState>) -> PageResult {
    let traditions = blocking(&state, |repo| repo.list_traditions()).await?;
    Ok(Html(html::page(
        "Schools of Wisdom",
        &html::tradition_list(&traditions),
    )))
}

pub async fn tradition_detail(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let (tradition, related, philosophers, quotes) = blocking(&state, move |repo| {
        Ok((
            repo.get_tradition(&id)?,
            repo.tradition_related(&id)?,
            repo.tradition_philosophers(&id)?,
            repo.tradition_quotes(&id)?,
        ))
    })
    .await?;

    let mut body = String::new();
    let _ = write!(body, r#"<p class="muted">{}</p>"#, text(&tradition.origin));
    body.push_str("<h2>Core principles</h2>");
    body.push_str(&html::bullets(&tradition.core_principles));
    if !related.is_empty() {
        body.push_str("<h2>Related traditions</h2>");
        body.push_str(&html::bullets(&related));
    }
    body.push_str("<h2>Philosophers</h2>");
    body.push_str(&html::philosopher_list(&philosophers));
    body.push_str("<h2>Quotes</h2>");
    body.push_str(&html::quote_list(&quotes));
    Ok(Html(html::page(&tradition.name, &body)))
}

pub async fn themes(State(state): State<AppState>) -> PageResult {
    let themes = blocking(&state, |repo| repo.list_themes()).await?;
    Ok(Html(html::page("Perennial Themes", &html::theme_list(&themes))))
}

/// One theme across every tradition that addresses it.
pub async fn theme_detail(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let (theme, traditions, quotes, evidence) = blocking(&state, move |repo| {
        Ok((
            repo.get_theme(&id)?,
            repo.theme_traditions(&id)?,
            repo.theme_quotes(&id)?,
            repo.theme_evidence(&id)?,
        ))
    })
    .await?;

    let mut body = String::new();
    let _ = write!(body, "<p>{}</p>", text(&theme.description));
    body.push_str("<h2>Traditions</h2>");
    body.push_str(&html::bullets(&traditions));
    body.push_str("<h2>Quotes</h2>");
    body.push_str(&html::quote_list(&quotes));
    if !evidence.is_empty() {
        body.push_str("<h2>Evidence</h2>");
        body.push_str(&html::evidence_list(&evidence));
    }
    Ok(Html(html::page(&theme.name, &body)))
}

pub async fn evidence(State(state): State<AppState>, Query(params): Params) -> PageResult {
    let field = field_param(&params);
    let evidence = blocking(&state, move |repo| repo.list_evidence(field.as_deref())).await?;
    Ok(Html(html::page(
        "Scientific Evidence",
        &html::evidence_list(&evidence),
    )))
}

pub async fn evidence_detail(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let (evidence, themes, quotes) = blocking(&state, move |repo| {
        Ok((
            repo.get_evidence(&id)?,
            repo.evidence_themes(&id)?,
            repo.evidence_quotes(&id)?,
        ))
    })
    .await?;

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<p class="muted">{}</p><p>{}</p><p><cite>{}</cite></p>"#,
        text(&evidence.field),
        text(&evidence.finding),
        text(&evidence.source),
    );
    body.push_str("<h2>Themes</h2>");
    body.push_str(&html::theme_list(&themes));
    body.push_str("<h2>Quotes</h2>");
    body.push_str(&html::quote_list(&quotes));
    Ok(Html(html::page(&evidence.title, &body)))
}
