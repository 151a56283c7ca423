//! Technical-instrumentation signal: analytics tags, structured data, images.

use crate::extraction::document::selector;
use crate::extraction::Document;
use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

static LD_JSON: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"script[type="application/ld+json"]"#));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Substrings of the serialized document that indicate an analytics tag.
pub const ANALYTICS_MARKERS: &[&str] = &["google-analytics", "gtag", "googletagmanager"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechSignals {
    pub has_analytics: bool,
    pub has_structured_data: bool,
    pub image_count: usize,
    /// Images with a missing or empty `alt`. Display only; never scored.
    pub images_without_alt: usize,
}

impl TechSignals {
    /// Share of images carrying alt text, in percent. `None` without images.
    pub fn alt_coverage(&self) -> Option<u8> {
        if self.image_count == 0 {
            return None;
        }
        let covered = self.image_count - self.images_without_alt;
        Some(((covered * 100) / self.image_count) as u8)
    }
}

pub fn extract(doc: &Document) -> TechSignals {
    let markup = doc.markup();
    let has_analytics = ANALYTICS_MARKERS.iter().any(|m| markup.contains(m));

    let mut image_count = 0;
    let mut images_without_alt = 0;
    for img in doc.select(&IMG) {
        image_count += 1;
        if img.value().attr("alt").map_or(true, str::is_empty) {
            images_without_alt += 1;
        }
    }

    TechSignals {
        has_analytics,
        has_structured_data: doc.exists(&LD_JSON),
        image_count,
        images_without_alt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn extract_from(markup: &str) -> TechSignals {
        extract(&Document::parse(markup, Url::parse("https://example.com/").unwrap()))
    }

    #[test]
    fn test_analytics_and_structured_data() {
        let signals = extract_from(
            r#"<head>
                <script async src="https://www.googletagmanager.com/gtag/js?id=G-XXXX"></script>
                <script type="application/ld+json">{"@type":"Organization"}</script>
            </head>"#,
        );
        assert!(signals.has_analytics);
        assert!(signals.has_structured_data);
    }

    #[test]
    fn test_images_alt_counting() {
        let signals = extract_from(
            r#"<img src="a.png" alt="logo"><img src="b.png"><img src="c.png" alt="">"#,
        );
        assert_eq!(signals.image_count, 3);
        assert_eq!(signals.images_without_alt, 2);
        assert_eq!(signals.alt_coverage(), Some(33));
    }

    #[test]
    fn test_plain_page() {
        let signals = extract_from("<p>static page</p>");
        assert_eq!(signals, TechSignals::default());
        assert_eq!(signals.alt_coverage(), None);
    }
}
