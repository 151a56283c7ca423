//! Contact-channel signal: forms, phone numbers, mail links, contact pages.

use crate::extraction::document::{element_text, selector};
use crate::extraction::Document;
use regex::Regex;
use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

static FORM: LazyLock<Selector> = LazyLock::new(|| selector("form"));
static MAILTO: LazyLock<Selector> = LazyLock::new(|| selector(r#"a[href^="mailto:"]"#));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Japanese-style number: leading 0, three digit groups, optional separators.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0\d{1,4}[-‐ー]?\d{1,4}[-‐ー]?\d{3,4}").unwrap());

/// Fragments of href + anchor text that identify an inquiry page.
pub const CONTACT_KEYWORDS: &[&str] = &["問い合わせ", "お問合せ", "contact", "inquiry"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSignals {
    pub has_form: bool,
    pub has_phone: bool,
    /// First number found in the visible text.
    pub phone_number: Option<String>,
    pub has_email_link: bool,
    pub has_contact_page: bool,
}

pub fn extract(doc: &Document) -> ContactSignals {
    let phone_number = find_phone(&doc.text());

    let has_contact_page = doc.select(&ANCHOR).any(|a| {
        let href = a.value().attr("href").unwrap_or_default();
        let haystack = format!("{href}{}", element_text(&a)).to_lowercase();
        CONTACT_KEYWORDS.iter().any(|kw| haystack.contains(kw))
    });

    ContactSignals {
        has_form: doc.exists(&FORM),
        has_phone: phone_number.is_some(),
        phone_number,
        has_email_link: doc.exists(&MAILTO),
        has_contact_page,
    }
}

/// First phone-number-like match in `text`.
pub fn find_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}
