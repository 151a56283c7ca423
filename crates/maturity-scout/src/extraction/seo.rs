//! Metadata / SEO signal: title, description, viewport, OGP, headings, icons.

use crate::extraction::document::{element_text, selector, stripped_text};
use crate::extraction::Document;
use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

/// Characters kept from the first `<h1>`.
const H1_TEXT_LIMIT: usize = 50;

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="description"]"#));
static VIEWPORT: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="viewport"]"#));
static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[property="og:title"]"#));
static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static LINK_REL: LazyLock<Selector> = LazyLock::new(|| selector("link[rel]"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeoSignals {
    pub title: String,
    /// Length in characters, not bytes.
    pub title_length: usize,
    pub description: String,
    pub description_length: usize,
    pub has_viewport: bool,
    pub has_ogp: bool,
    pub h1_count: usize,
    pub h1_text: String,
    pub has_favicon: bool,
    pub has_canonical: bool,
}

pub fn extract(doc: &Document) -> SeoSignals {
    let title = doc
        .first(&TITLE)
        .map(|el| element_text(&el).trim().to_string())
        .unwrap_or_default();

    let description = doc
        .first(&DESCRIPTION)
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    let h1_count = doc.count(&H1);
    let h1_text = doc
        .first(&H1)
        .map(|el| stripped_text(&el).chars().take(H1_TEXT_LIMIT).collect())
        .unwrap_or_default();

    let rels: Vec<String> = doc
        .select(&LINK_REL)
        .filter_map(|el| el.value().attr("rel"))
        .map(str::to_ascii_lowercase)
        .collect();
    let has_favicon = rels.iter().any(|rel| rel.contains("icon"));
    let has_canonical = rels
        .iter()
        .any(|rel| rel.split_ascii_whitespace().any(|token| token == "canonical"));

    SeoSignals {
        title_length: title.chars().count(),
        title,
        description_length: description.chars().count(),
        description,
        has_viewport: doc.exists(&VIEWPORT),
        has_ogp: doc.exists(&OG_TITLE),
        h1_count,
        h1_text,
        has_favicon,
        has_canonical,
    }
}
