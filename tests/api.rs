//! End-to-end tests for the connector HTTP surface.

use regex_connector::ConnectorConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

async fn post(server: &common::TestServer, operation_id: &str, body: Value) -> (StatusCode, Value) {
    let res = common::client()
        .post(server.operation_url(operation_id))
        .json(&body)
        .send()
        .await
        .expect("connector unreachable");
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_is_match_success() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let (status, body) = post(
        &server,
        "RegexIsMatch",
        json!({"textToCheck": "hello123", "regex": "[0-9]+"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"textToCheck": "hello123", "isMatch": true, "matchedData": ["123"]})
    );
}

#[tokio::test]
async fn test_is_match_reports_groups_and_no_match() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let (_, body) = post(
        &server,
        "RegexIsMatch",
        json!({"textToCheck": "2024-05-17", "pattern": r"(\d{4})-(\d{2})"}),
    )
    .await;
    assert_eq!(body["matchedData"], json!(["2024", "05"]));

    let (status, body) = post(
        &server,
        "RegexIsMatch",
        json!({"textToCheck": "no digits", "regex": r"\d"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isMatch"], false);
    assert_eq!(body["matchedData"], json!([]));
}

#[tokio::test]
async fn test_match_counts_and_no_match_message() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let (status, body) = post(
        &server,
        "RegexMatch",
        json!({"textToCheck": "Cat cat CAT", "pattern": "cat", "option": "ignorecase"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 3);
    assert_eq!(body["matchedData"], json!(["Cat", "cat", "CAT"]));

    let (status, body) = post(
        &server,
        "RegexMatch",
        json!({"textToCheck": "abc", "pattern": "z"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 0);
    assert_eq!(body["message"], "No matches found.");
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let (status, body) = post(&server, "RegexIsMatch", json!({"textToCheck": "abc"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("textToCheck"));
    assert!(error.contains("regex"));
}

#[tokio::test]
async fn test_invalid_pattern_is_bad_request() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let (status, body) = post(
        &server,
        "RegexMatch",
        json!({"textToCheck": "abc", "pattern": "("}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid regex pattern"));
}

#[tokio::test]
async fn test_unknown_operation_echoes_id() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let (status, body) = post(&server, "RegexSplit", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown operation ID 'RegexSplit'");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let res = common::client()
        .post(server.operation_url("RegexIsMatch"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = ConnectorConfig::default();
    config.limits.max_body_bytes = 64;
    let server = common::start_server(config).await;

    let res = common::client()
        .post(server.operation_url("RegexMatch"))
        .json(&json!({"textToCheck": "x".repeat(1024), "pattern": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let body: Value = res.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to read request body"));
}

#[tokio::test]
async fn test_regex_and_pattern_together_is_malformed() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let (status, body) = post(
        &server,
        "RegexIsMatch",
        json!({"textToCheck": "abc", "regex": "a", "pattern": "b"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_headers_and_correlation_id() {
    let server = common::start_server(ConnectorConfig::default()).await;
    let client = common::client();

    let res = client
        .post(server.operation_url("RegexIsMatch"))
        .header("x-correlation-id", "corr-42")
        .json(&json!({"textToCheck": "a", "regex": "a"}))
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    assert_eq!(res.headers()["x-correlation-id"], "corr-42");

    let res = client
        .post(server.operation_url("RegexIsMatch"))
        .json(&json!({"textToCheck": "a", "regex": "a"}))
        .send()
        .await
        .unwrap();
    let generated = res.headers()["x-correlation-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn test_health() {
    let server = common::start_server(ConnectorConfig::default()).await;

    let res = common::client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
