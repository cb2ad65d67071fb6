//! HTML rendering by string building.
//!
//! Every piece of dynamic text passes through [`text`] or [`attr`] before it is
//! spliced into markup.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

use crate::wisdom::types::{EvidenceRow, PhilosopherRow, QuoteRow, ThemeRow, TraditionRow};

/// Escape text content.
pub fn text(s: &str) -> String {
    encode_text(s).into_owned()
}

/// Escape a double-quoted attribute value.
pub fn attr(s: &str) -> String {
    encode_double_quoted_attribute(s).into_owned()
}

const STYLE: &str = r#"
body { font-family: Georgia, serif; max-width: 52rem; margin: 0 auto; padding: 1rem 1.5rem; color: #222; background: #fbfaf6; }
nav a { margin-right: 1rem; }
blockquote { border-left: 3px solid #b59b5d; margin: 1.25rem 0; padding: 0.25rem 1rem; }
blockquote footer { font-size: 0.9rem; color: #666; }
.muted { color: #666; }
ul.cards { list-style: none; padding: 0; }
ul.cards li { margin-bottom: 1rem; }
"#;

/// Wrap `body` in the site layout.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Perennial Wisdom</title>
<script src="https://unpkg.com/htmx.org@1.9.12"></script>
<style>{STYLE}</style>
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/pages/quotes">Quotes</a>
<a href="/pages/philosophers">Philosophers</a>
<a href="/pages/traditions">Traditions</a>
<a href="/pages/themes">Themes</a>
<a href="/pages/evidence">Evidence</a>
</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = text(title),
    )
}

/// Link to a detail page, e.g. `/pages/themes/control`.
fn link(section: &str, id: &str, label: &str) -> String {
    format!(
        r#"<a href="/pages/{section}/{}">{}</a>"#,
        attr(id),
        text(label)
    )
}

pub fn quote_card(q: &QuoteRow) -> String {
    let mut out = String::from("<blockquote>");
    if !q.title.is_empty() {
        let _ = write!(out, "<strong>{}</strong>", text(&q.title));
    }
    let _ = write!(out, "<p>{}</p>", text(&q.text));
    let _ = write!(
        out,
        "<footer>{} · {}",
        link("philosophers", &q.philosopher_id, &q.philosopher_name),
        link("traditions", &q.tradition_id, &q.tradition_name)
    );
    if !q.source.is_empty() {
        let _ = write!(out, " · <cite>{}</cite>", text(&q.source));
    }
    out.push_str("</footer>");
    if !q.summary.is_empty() {
        let _ = write!(out, r#"<p class="muted">{}</p>"#, text(&q.summary));
    }
    out.push_str("</blockquote>");
    out
}

pub fn quote_list(quotes: &[QuoteRow]) -> String {
    if quotes.is_empty() {
        return r#"<p class="muted">No quotes.</p>"#.to_string();
    }
    quotes.iter().map(quote_card).collect()
}

/// The fragment swapped in by the home page's "another" button.
pub fn random_quote_fragment(q: &QuoteRow) -> String {
    format!(r#"<div id="random-quote">{}</div>"#, quote_card(q))
}

pub fn philosopher_list(philosophers: &[PhilosopherRow]) -> String {
    let mut out = String::from(r#"<ul class="cards">"#);
    for p in philosophers {
        let _ = write!(
            out,
            r#"<li>{} <span class="muted">{} · {}</span></li>"#,
            link("philosophers", &p.id, &p.name),
            text(&p.tradition_name),
            text(&p.era)
        );
    }
    out.push_str("</ul>");
    out
}

pub fn tradition_list(traditions: &[TraditionRow]) -> String {
    let mut out = String::from(r#"<ul class="cards">"#);
    for t in traditions {
        let _ = write!(
            out,
            r#"<li>{} <span class="muted">{}</span></li>"#,
            link("traditions", &t.id, &t.name),
            text(&t.origin)
        );
    }
    out.push_str("</ul>");
    out
}

pub fn theme_list(themes: &[ThemeRow]) -> String {
    let mut out = String::from(r#"<ul class="cards">"#);
    for t in themes {
        let _ = write!(
            out,
            "<li>{}<br>{}</li>",
            link("themes", &t.id, &t.name),
            text(&t.description)
        );
    }
    out.push_str("</ul>");
    out
}

pub fn evidence_list(evidence: &[EvidenceRow]) -> String {
    let mut out = String::from(r#"<ul class="cards">"#);
    for e in evidence {
        let _ = write!(
            out,
            r#"<li>{} <span class="muted">{}</span></li>"#,
            link("evidence", &e.id, &e.title),
            text(&e.field)
        );
    }
    out.push_str("</ul>");
    out
}

/// Plain bullet list of already-plain strings.
pub fn bullets(items: &[String]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", text(item));
    }
    out.push_str("</ul>");
    out
}

/// A `<select>` for the quote filter form, with `selected` set on the current value.
pub fn select(name: &str, options: &[(String, String)], current: Option<&str>) -> String {
    let mut out = format!(r#"<select name="{}"><option value="">All</option>"#, attr(name));
    for (value, label) in options {
        let selected = if current == Some(value.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            out,
            r#"<option value="{}"{selected}>{}</option>"#,
            attr(value),
            text(label)
        );
    }
    out.push_str("</select>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> QuoteRow {
        QuoteRow {
            id: "x1".into(),
            slug: String::new(),
            title: String::new(),
            text: "<script>alert('x')</script> & more".into(),
            philosopher_id: "p\"1".into(),
            philosopher_name: "Someone".into(),
            tradition_id: "t1".into(),
            tradition_name: "Somewhere".into(),
            source: "Fragments".into(),
            summary: String::new(),
        }
    }

    #[test]
    fn quote_text_is_escaped() {
        let html = quote_card(&quote());
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn ids_in_links_are_attribute_escaped() {
        let html = quote_card(&quote());
        assert!(html.contains(r#"href="/pages/philosophers/p&quot;1""#));
    }

    #[test]
    fn select_marks_current_option() {
        let options = vec![
            ("stoic".to_string(), "Stoicism".to_string()),
            ("taoist".to_string(), "Taoism".to_string()),
        ];
        let html = select("tradition", &options, Some("taoist"));
        assert!(html.contains(r#"<option value="taoist" selected>Taoism</option>"#));
        assert!(html.contains(r#"<option value="stoic">Stoicism</option>"#));
    }

    #[test]
    fn page_escapes_title() {
        let html = page("A <b> title", "<p>body</p>");
        assert!(html.contains("<h1>A &lt;b&gt; title</h1>"));
        assert!(html.contains("<p>body</p>"));
    }
}
