//! Integration tests for probing single targets

mod common;

use std::time::Duration;

use common::{TEST_USER_AGENT, Workspace};
use panelwatch::config::ContentPolicy;
use panelwatch::http_probe::prelude::*;
use panelwatch::session::Session;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn probe(server: &MockServer, route: &str) -> Verdict {
    let workspace = Workspace::new(&[]);
    let session = Session::new(&workspace.config()).expect("Failed to create session");
    let url = format!("{}{route}", server.uri());
    probe_target(&session, &url, &ContentPolicy::default()).await
}

#[tokio::test]
async fn test_healthy_page_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Dashboard</h1>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let verdict = probe(&mock_server, "/dashboard").await;
    assert_eq!(verdict.classification, Classification::Ok);
    assert_eq!(verdict.reason, "OK 200");
    assert_eq!(verdict.http_status, Some(200));
}

#[tokio::test]
async fn test_server_error_is_critical() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let verdict = probe(&mock_server, "/broken").await;
    assert_eq!(verdict.classification, Classification::Critical);
    assert!(verdict.reason.contains("500"), "reason: {}", verdict.reason);
}

#[tokio::test]
async fn test_not_found_is_critical() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Fatal error"))
        .mount(&mock_server)
        .await;

    let verdict = probe(&mock_server, "/gone").await;
    assert_eq!(verdict.classification, Classification::Critical);
    assert_eq!(verdict.reason, "ERROR HTTP 404");
}

#[tokio::test]
async fn test_rate_limited_is_warning() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let verdict = probe(&mock_server, "/busy").await;
    assert_eq!(verdict.classification, Classification::Warning);
    assert!(verdict.reason.contains("429"));
}

#[tokio::test]
async fn test_error_page_with_success_status_is_critical() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<br />\n<b>Fatal error</b>:  Allowed memory size exhausted in /var/www/index.php",
        ))
        .mount(&mock_server)
        .await;

    let verdict = probe(&mock_server, "/report").await;
    assert_eq!(verdict.classification, Classification::Critical);
    assert!(verdict.reason.contains("Fatal error"), "reason: {}", verdict.reason);
    assert_eq!(verdict.http_status, Some(200));
}

#[tokio::test]
async fn test_timeout_is_critical() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let workspace = Workspace::new(&[]);
    let mut config = workspace.config();
    config.request_timeout = Duration::from_millis(200);
    let session = Session::new(&config).expect("Failed to create session");

    let url = format!("{}/slow", mock_server.uri());
    let verdict = probe_target(&session, &url, &config.content_policy).await;
    assert_eq!(verdict.classification, Classification::Critical);
    assert!(
        verdict.reason.starts_with("EXCEPTION: Timeout"),
        "reason: {}",
        verdict.reason
    );
    assert_eq!(verdict.http_status, None);
}

#[tokio::test]
async fn test_unreachable_and_malformed_targets_are_critical() {
    let workspace = Workspace::new(&[]);
    let session = Session::new(&workspace.config()).expect("Failed to create session");
    let policy = ContentPolicy::default();

    for url in ["http://127.0.0.1:1/", "not a url"] {
        let verdict = probe_target(&session, url, &policy).await;
        assert_eq!(verdict.classification, Classification::Critical, "{url}");
        assert!(verdict.reason.starts_with("EXCEPTION: "), "reason: {}", verdict.reason);
        assert_eq!(verdict.url, url);
    }
}
