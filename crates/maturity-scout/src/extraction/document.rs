//! Parsed, queryable representation of a fetched page.
//!
//! Parsing is tolerant: malformed markup still yields a tree, and any element
//! a query cannot find is simply absent.

use crate::acquisition::FetchedPage;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Elements whose text never reaches the reader.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed HTML document bound to the URL it was served from.
pub struct Document {
    html: Html,
    url: Url,
}

impl Document {
    /// Parse markup served from `url`.
    pub fn parse(markup: &str, url: Url) -> Self {
        Self {
            html: Html::parse_document(markup),
            url,
        }
    }

    /// Parse a fetched page, anchored at its post-redirect URL.
    pub fn from_page(page: &FetchedPage) -> Self {
        Self::parse(&page.body, page.final_url.clone())
    }

    /// The URL relative links resolve against.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.html.select(selector)
    }

    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    pub fn exists(&self, selector: &Selector) -> bool {
        self.first(selector).is_some()
    }

    pub fn count(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }

    /// Reader-visible text: every text node outside script/style blocks,
    /// concatenated in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in self.html.root_element().descendants() {
            if let Node::Text(text) = node.value() {
                let hidden = node.ancestors().any(|ancestor| {
                    matches!(ancestor.value(), Node::Element(el) if HIDDEN_TAGS.contains(&el.name()))
                });
                if !hidden {
                    out.push_str(text);
                }
            }
        }
        out
    }

    /// The whole document re-serialized as markup.
    pub fn markup(&self) -> String {
        self.html.html()
    }
}

/// All text under an element, untrimmed.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text under an element with each fragment trimmed and empty fragments dropped.
pub fn stripped_text(el: &ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a static selector. Only used with literal selectors known to be valid.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}
