//! Fetch and search capability behavior against a stub HTTP server.
//!
//! Both tools must encode every failure in-band as text; none of these
//! cases may surface an error to the caller.

use pressroom::Tool;
use pressroom::tools::{FetchTool, SearchTool};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn page_server(html: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_invalid_url_returns_sentinel() {
    let tool = FetchTool::new();
    let result = tool.call("not a url").await;
    assert!(result.contains("Invalid URL format"));
    assert!(result.contains("not a url"));
}

#[tokio::test]
async fn test_fetch_truncates_long_pages_to_2500_chars() {
    let body = "a".repeat(5000);
    let server = page_server(format!("<html><body><p>{body}</p></body></html>")).await;

    let tool = FetchTool::new();
    let result = tool.call(&format!("{}/article", server.uri())).await;

    assert_eq!(result.chars().count(), 2500);
    assert!(result.chars().all(|c| c == 'a'));
}

#[tokio::test]
async fn test_fetch_reports_insufficient_content() {
    // 30 characters of extracted text, under the 50-char floor.
    let server = page_server(
        "<html><body><p>abcdefghijklmnopqrstuvwxyz0123</p></body></html>".to_string(),
    )
    .await;

    let tool = FetchTool::new();
    let result = tool.call(&format!("{}/article", server.uri())).await;

    assert!(result.contains("Insufficient content"));
    assert!(!result.contains("abcdefghijklmnopqrstuvwxyz0123"));
}

#[tokio::test]
async fn test_fetch_http_error_is_reported_in_band() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let tool = FetchTool::new();
    let url = format!("{}/article", server.uri());
    let result = tool.call(&url).await;

    assert!(result.contains("Error fetching content"));
    assert!(result.contains(&url));
}

#[tokio::test]
async fn test_fetch_connection_failure_is_reported_in_band() {
    // Grab a port that stops listening, then fetch it.
    let server = MockServer::start().await;
    let url = format!("{}/article", server.uri());
    drop(server);

    let tool = FetchTool::new();
    let result = tool.call(&url).await;
    assert!(result.contains("Error fetching content"));
}

#[tokio::test]
async fn test_search_formats_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "organic": [
                {"title": "Solar Basics", "link": "https://example.com/solar", "snippet": "How panels work."},
                {"title": "Wind Power", "link": "https://example.com/wind", "snippet": "Turbine overview."}
            ]
        })))
        .mount(&server)
        .await;

    let tool =
        SearchTool::new("test-key").with_endpoint(format!("{}/search", server.uri()));
    let result = tool.call("renewable energy").await;

    assert!(result.contains("1. Solar Basics - https://example.com/solar"));
    assert!(result.contains("2. Wind Power - https://example.com/wind"));
    assert!(result.contains("Turbine overview."));
}

#[tokio::test]
async fn test_search_error_is_reported_in_band() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let tool =
        SearchTool::new("test-key").with_endpoint(format!("{}/search", server.uri()));
    let result = tool.call("renewable energy").await;

    assert!(result.starts_with("Error searching"));
}

#[tokio::test]
async fn test_search_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let tool =
        SearchTool::new("test-key").with_endpoint(format!("{}/search", server.uri()));
    let result = tool.call("renewable energy").await;

    assert!(result.contains("No results found"));
}
