//! Whole-page scenarios: markup in, scorecard and rank out.

use maturity_scout::classify::Rank;
use maturity_scout::scoring::{ScoreCategory, Status};
use maturity_scout::{analyze_page, FetchedPage};
use url::Url;

fn page(url: &str, body: String) -> (Url, FetchedPage) {
    let url = Url::parse(url).unwrap();
    let page = FetchedPage {
        requested_url: url.clone(),
        final_url: url.clone(),
        status: 200,
        content_type: Some("text/html; charset=utf-8".to_string()),
        body,
    };
    (url, page)
}

/// A well-built corporate home page that should land in rank D.
fn mature_site() -> String {
    let mut anchors = String::new();
    // 39 plain internal pages plus one internal recruiting link.
    for i in 0..39 {
        anchors.push_str(&format!("<a href=\"/pages/{i}\">Page</a>\n"));
    }
    anchors.push_str("<a href=\"/recruit/\">Join us</a>\n");
    anchors.push_str("<a href=\"https://twitter.com/acme\">X</a>\n");
    anchors.push_str("<a href=\"https://www.facebook.com/acme\">FB</a>\n");
    anchors.push_str("<a href=\"https://instagram.com/acme\">IG</a>\n");
    for i in 0..77 {
        anchors.push_str(&format!("<a href=\"https://partner{i}.example.org/\">Partner</a>\n"));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <meta name="description" content="{description}">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="icon" href="/favicon.ico">
  <script async src="https://www.googletagmanager.com/gtag/js?id=G-TEST"></script>
</head>
<body>
  <header><p>TEL 03-1234-5678</p></header>
  <h1>Welcome</h1>
  <nav>{anchors}</nav>
  <form action="/send" method="post"><input name="q"></form>
</body>
</html>"#,
        title = "T".repeat(45),
        description = "D".repeat(120),
    )
}

#[test]
fn test_mature_site_scores_90_rank_d() {
    let (url, page) = page("https://www.acme.co.jp/", mature_site());
    let result = analyze_page(url, &page);

    let links = &result.signals.links;
    assert_eq!(links.total_links, 120);
    assert_eq!(links.internal_links, 40);
    assert_eq!(links.external_links, 80);
    assert_eq!(links.social_count(), 3);
    assert!(links.recruit_found);
    assert_eq!(result.signals.seo.title_length, 45);
    assert_eq!(result.signals.seo.description_length, 120);
    assert_eq!(
        result.signals.contact.phone_number.as_deref(),
        Some("03-1234-5678")
    );

    let points = |c| result.detail(c).map(|d| d.points).unwrap();
    assert_eq!(points(ScoreCategory::Security), 10);
    assert_eq!(points(ScoreCategory::SeoBasics), 25);
    assert_eq!(points(ScoreCategory::SocialPresence), 15);
    assert_eq!(points(ScoreCategory::ContentRichness), 15);
    assert_eq!(points(ScoreCategory::ContactPathways), 10);
    assert_eq!(points(ScoreCategory::TechnicalOps), 5);
    assert_eq!(points(ScoreCategory::RecruitingPage), 10);

    assert_eq!(result.score, 90);
    assert_eq!(result.rank, Rank::D);
    assert_eq!(
        result.detail(ScoreCategory::TechnicalOps).map(|d| d.status),
        Some(Status::Partial)
    );
}

#[test]
fn test_same_page_over_http_loses_security_only() {
    let (url, page) = page("http://www.acme.co.jp/", mature_site());
    let result = analyze_page(url, &page);
    assert_eq!(result.score, 80);
    assert_eq!(result.rank, Rank::D);
}

#[test]
fn test_bare_page_is_top_priority() {
    let (url, page) = page(
        "http://old-shop.example.jp/",
        "<html><body><table><tr><td>ようこそ</td></tr></table></body></html>".to_string(),
    );
    let result = analyze_page(url, &page);
    assert_eq!(result.score, 0);
    assert_eq!(result.rank, Rank::S);
    assert!(result.details.iter().all(|d| d.status == Status::Missing));
}

#[test]
fn test_malformed_markup_is_best_effort() {
    let (url, page) = page(
        "https://broken.example.com/",
        "<html><head><title>Unclosed <body><h1>Hi<a href='/x'>x</a><img src=a.png".to_string(),
    );
    let result = analyze_page(url, &page);
    assert!(result.score <= 100);
    assert_eq!(result.details.len(), 7);
}

#[test]
fn test_rank_boundaries() {
    let cases = [
        (0, Rank::S),
        (25, Rank::S),
        (26, Rank::A),
        (40, Rank::A),
        (41, Rank::B),
        (55, Rank::B),
        (56, Rank::C),
        (70, Rank::C),
        (71, Rank::D),
        (100, Rank::D),
    ];
    for (score, rank) in cases {
        assert_eq!(Rank::from_score(score), rank, "score {score}");
    }
}

#[test]
fn test_http_input_redirected_to_https_scores_zero_security() {
    let requested = Url::parse("http://plain.example.jp/").unwrap();
    let page = FetchedPage {
        requested_url: requested.clone(),
        final_url: Url::parse("https://plain.example.jp/").unwrap(),
        status: 200,
        content_type: Some("text/html; charset=utf-8".to_string()),
        body: mature_site(),
    };
    let result = analyze_page(requested, &page);

    assert!(!result.signals.https);
    assert_eq!(
        result.detail(ScoreCategory::Security).map(|d| d.points),
        Some(0)
    );
    assert_eq!(result.score, 80);
}
