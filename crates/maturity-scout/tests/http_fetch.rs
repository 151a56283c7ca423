//! Fetcher behaviour against a local mock server.

use maturity_scout::acquisition::{HttpClient, PageFetcher};
use maturity_scout::{AnalysisError, Config};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(timeout_secs: u64) -> HttpClient {
    HttpClient::new(&Config::default().with_timeout_secs(timeout_secs)).unwrap()
}

fn url(server: &MockServer, p: &str) -> Url {
    Url::parse(&format!("{}{p}", server.uri())).unwrap()
}

#[tokio::test]
async fn test_fetch_ok_decodes_utf8() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string("<title>株式会社サンプル</title>"),
        )
        .mount(&server)
        .await;

    let page = client(5).fetch(&url(&server, "/")).await.unwrap();
    assert_eq!(page.status, 200);
    assert!(page.body.contains("株式会社サンプル"));
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(5).fetch(&url(&server, "/gone")).await.unwrap_err();
    assert_eq!(err, AnalysisError::HttpStatus { code: 404 });
    assert_eq!(err.to_string(), "HTTP 404");
}

#[tokio::test]
async fn test_redirect_followed_to_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>moved</h1>"))
        .mount(&server)
        .await;

    let page = client(5).fetch(&url(&server, "/old")).await.unwrap();
    assert_eq!(page.final_url.path(), "/new");
    assert_eq!(page.requested_url.path(), "/old");
    assert!(page.body.contains("moved"));
}

#[tokio::test]
async fn test_shift_jis_detected_from_meta() {
    let markup = r#"<html><head><meta charset="Shift_JIS"><title>採用情報</title></head></html>"#;
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(markup);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(bytes.into_owned(), "text/html"))
        .mount(&server)
        .await;

    let page = client(5).fetch(&url(&server, "/")).await.unwrap();
    assert!(page.body.contains("採用情報"));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let err = client(1).fetch(&url(&server, "/")).await.unwrap_err();
    assert_eq!(err, AnalysisError::Timeout);
}

#[tokio::test]
async fn test_refused_connection() {
    // Port 1 is reserved and nothing listens on it in test environments.
    let err = client(5)
        .fetch(&Url::parse("http://127.0.0.1:1/").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, AnalysisError::ConnectionFailure);
}

#[tokio::test]
async fn test_redirect_loop_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/loop", server.uri())),
        )
        .mount(&server)
        .await;

    let err = client(5).fetch(&url(&server, "/loop")).await.unwrap_err();
    match err {
        AnalysisError::Transport { ref detail } => {
            assert!(!detail.is_empty());
            assert!(detail.chars().count() <= maturity_scout::error::DETAIL_LIMIT);
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
    assert_eq!(err.kind(), "transport");
}
