//! Link-graph signal: internal/external split, social profiles, recruiting page.

use crate::extraction::document::{selector, stripped_text};
use crate::extraction::Document;
use indexmap::IndexMap;
use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Known social networks, checked in order; the first matching entry names the link.
pub const SOCIAL_NETWORKS: &[(&str, &str)] = &[
    ("twitter.com", "Twitter/X"),
    ("x.com", "X"),
    ("facebook.com", "Facebook"),
    ("instagram.com", "Instagram"),
    ("linkedin.com", "LinkedIn"),
    ("youtube.com", "YouTube"),
    ("tiktok.com", "TikTok"),
    ("line.me", "LINE"),
    ("note.com", "note"),
];

/// Href/text fragments that mark a recruiting or careers page.
pub const RECRUIT_KEYWORDS: &[&str] = &[
    "recruit",
    "career",
    "careers",
    "jobs",
    "hiring",
    "採用",
    "求人",
    "リクルート",
    "新卒",
    "中途",
    "entry",
    "joblist",
    "employment",
];

/// Href prefixes that never count as navigable links.
const SKIPPED_PREFIXES: &[&str] = &["#", "javascript:", "mailto:", "tel:"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkSignals {
    /// Every anchor carrying an `href`, skipped ones included.
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
    /// Network name -> last profile URL seen, in first-seen order.
    pub social_links: IndexMap<String, String>,
    pub recruit_found: bool,
    pub recruit_url: Option<String>,
}

impl LinkSignals {
    pub fn social_count(&self) -> usize {
        self.social_links.len()
    }
}

pub fn extract(doc: &Document) -> LinkSignals {
    let page_authority = authority(doc.url());
    let mut signals = LinkSignals::default();

    for anchor in doc.select(&ANCHOR) {
        signals.total_links += 1;

        let href = anchor.value().attr("href").unwrap_or_default().trim();
        let Some(resolved) = resolve(doc.url(), href) else {
            continue;
        };

        let host = resolved.host_str().map(str::to_ascii_lowercase);
        match host.as_deref() {
            None | Some("") => signals.internal_links += 1,
            Some(_) if authority(&resolved) == page_authority => signals.internal_links += 1,
            Some(_) => signals.external_links += 1,
        }

        if let Some(network) = host.as_deref().and_then(social_network) {
            signals
                .social_links
                .insert(network.to_string(), resolved.to_string());
        }

        // Every anchor is checked; only the first hit is recorded.
        let href_lower = href.to_lowercase();
        let text_lower = stripped_text(&anchor).to_lowercase();
        let is_recruit = RECRUIT_KEYWORDS
            .iter()
            .any(|kw| href_lower.contains(kw) || text_lower.contains(kw));
        if is_recruit && !signals.recruit_found {
            signals.recruit_found = true;
            signals.recruit_url = Some(resolved.to_string());
        }
    }

    signals
}

/// Lowercased host plus explicit port. A scheme's default port is not
/// explicit, so `http://` and `https://` on one host share an authority.
fn authority(url: &Url) -> (Option<String>, Option<u16>) {
    (url.host_str().map(str::to_ascii_lowercase), url.port())
}

/// Name of the first social network whose domain is `host` or a parent of it.
pub fn social_network(host: &str) -> Option<&'static str> {
    SOCIAL_NETWORKS
        .iter()
        .find(|(domain, _)| host_matches(host, domain))
        .map(|(_, name)| *name)
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Resolve `href` against `base`, returning `None` for unusable links.
pub fn resolve(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || SKIPPED_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return None;
    }
    base.join(href).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_from(markup: &str) -> LinkSignals {
        extract(&Document::parse(
            markup,
            Url::parse("https://example.co.jp/index.html").unwrap(),
        ))
    }

    #[test]
    fn test_internal_external_split() {
        let signals = extract_from(
            r##"
            <a href="/about">About</a>
            <a href="news/1.html">News</a>
            <a href="https://example.co.jp/products">Products</a>
            <a href="https://partner.com/">Partner</a>
            <a href="#top">Top</a>
            <a href="mailto:info@example.co.jp">Mail</a>
            <a href="tel:03-1234-5678">Tel</a>
            <a href="javascript:void(0)">JS</a>
            <a href="   ">Blank</a>
            <a>No href</a>
        "##,
        );

        assert_eq!(signals.total_links, 9);
        assert_eq!(signals.internal_links, 3);
        assert_eq!(signals.external_links, 1);
    }

    #[test]
    fn test_social_map_keeps_last_url_per_network() {
        let signals = extract_from(
            r#"
            <a href="https://www.facebook.com/first">fb</a>
            <a href="https://twitter.com/acme">tw</a>
            <a href="https://facebook.com/second">fb again</a>
            <a href="https://www.instagram.com/acme">ig</a>
        "#,
        );

        assert_eq!(signals.social_count(), 3);
        let names: Vec<&str> = signals.social_links.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Facebook", "Twitter/X", "Instagram"]);
        assert_eq!(signals.social_links["Facebook"], "https://facebook.com/second");
    }

    #[test]
    fn test_social_lookup_order_and_boundaries() {
        assert_eq!(social_network("twitter.com"), Some("Twitter/X"));
        assert_eq!(social_network("mobile.twitter.com"), Some("Twitter/X"));
        assert_eq!(social_network("x.com"), Some("X"));
        assert_eq!(social_network("page.line.me"), Some("LINE"));
        assert_eq!(social_network("netflix.com"), None);
        assert_eq!(social_network("keynote.com"), None);
    }

    #[test]
    fn test_lookalike_hosts_are_not_social() {
        // Suffix text alone is not enough; the host must be the network or a subdomain.
        assert_eq!(social_network("www.dropbox.com"), None);
        assert_eq!(social_network("dropbox.com"), None);
        assert_eq!(social_network("myfacebook.com"), None);

        let signals = extract_from(r#"<a href="https://www.dropbox.com/s/abc">Files</a>"#);
        assert_eq!(signals.social_count(), 0);
        assert_eq!(signals.external_links, 1);
    }

    #[test]
    fn test_other_port_is_external() {
        let signals = extract_from(
            r#"
            <a href="https://example.co.jp:8443/admin">Admin</a>
            <a href="https://example.co.jp:443/home">Home</a>
            <a href="http://example.co.jp/legacy">Legacy</a>
        "#,
        );
        assert_eq!(signals.external_links, 1);
        assert_eq!(signals.internal_links, 2);
    }

    #[test]
    fn test_recruit_first_match_kept() {
        let signals = extract_from(
            r#"
            <a href="/company">会社概要</a>
            <a href="/info">採用情報</a>
            <a href="/careers/">Careers</a>
        "#,
        );

        assert!(signals.recruit_found);
        assert_eq!(
            signals.recruit_url.as_deref(),
            Some("https://example.co.jp/info")
        );
    }

    #[test]
    fn test_recruit_matched_by_href() {
        let signals = extract_from(r#"<a href="/RECRUIT/index.html">Join us</a>"#);
        assert!(signals.recruit_found);
    }

    #[test]
    fn test_no_links() {
        let signals = extract_from("<p>nothing here</p>");
        assert_eq!(signals, LinkSignals::default());
    }

    #[test]
    fn test_resolve() {
        let base = Url::parse("https://example.com/a/b.html").unwrap();
        assert_eq!(resolve(&base, "c.html").unwrap().as_str(), "https://example.com/a/c.html");
        assert!(resolve(&base, "#frag").is_none());
        assert!(resolve(&base, "tel:0312345678").is_none());
    }
}
