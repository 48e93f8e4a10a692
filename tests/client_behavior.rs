//! Integration tests for the preconfigured API client: base-origin joining,
//! timeout behavior, and the log-and-re-fail response interceptor.

use std::error::Error as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kbchat_frontend::api::ApiClient;
use kbchat_frontend::api::types::{ChatRequest, CreateKbRequest};
use kbchat_frontend::config::ApiConfig;
use tracing_subscriber::layer::SubscriberExt;

mod common;

fn client_for(addr: std::net::SocketAddr, timeout_ms: u64) -> ApiClient {
    let config = ApiConfig {
        base_origin: format!("http://{addr}"),
        timeout_ms,
    };
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_request_goes_to_base_origin_plus_path() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = seen.clone();
    let addr = common::start_backend(move |method, path| {
        let s = s.clone();
        async move {
            s.lock().unwrap().push((method, path));
            (200, "[]".to_string())
        }
    })
    .await;

    let client = client_for(addr, 10_000);
    let response = client.get("/kb/list").await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![("GET".to_string(), "/kb/list".to_string())]
    );
}

#[tokio::test]
async fn test_typed_endpoints_decode_responses() {
    let addr = common::start_backend(|method, path| async move {
        match (method.as_str(), path.as_str()) {
            ("GET", "/kb/list") => (
                200,
                r#"[{"id": 1, "name": "rust", "description": null, "created_at": "2026-01-01"}]"#
                    .to_string(),
            ),
            ("POST", "/kb/create") => (
                200,
                r#"{"id": 2, "name": "papers", "description": "pdf dump", "created_at": "2026-01-02"}"#
                    .to_string(),
            ),
            ("POST", "/chat") => (
                200,
                r#"{"answer": "borrowck", "session_id": "s-1"}"#.to_string(),
            ),
            ("POST", "/upload") => (
                200,
                r#"{"status": "success", "message": "parsed"}"#.to_string(),
            ),
            _ => (404, "{}".to_string()),
        }
    })
    .await;

    let client = client_for(addr, 10_000);

    let kbs = client.list_kbs().await.unwrap();
    assert_eq!(kbs.len(), 1);
    assert_eq!(kbs[0].name, "rust");
    assert!(kbs[0].description.is_none());

    let created = client
        .create_kb(&CreateKbRequest {
            name: "papers".to_string(),
            description: Some("pdf dump".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 2);

    let reply = client.chat(&ChatRequest::new("what owns this", 1)).await.unwrap();
    assert_eq!(reply.answer, "borrowck");
    assert_eq!(reply.session_id, "s-1");

    let uploaded = client
        .upload_document(1, "guide.pdf", b"%PDF-1.4".to_vec())
        .await
        .unwrap();
    assert_eq!(uploaded.status, "success");
}

#[tokio::test]
async fn test_no_response_within_bound_is_timeout_failure() {
    let addr = common::start_backend(|_, _| async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        (200, "{}".to_string())
    })
    .await;

    let client = client_for(addr, 100);
    let err = client.get("/kb/list").await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got: {err}");
}

#[tokio::test]
async fn test_non_2xx_fails_with_original_status() {
    let addr = common::start_backend(|_, _| async move {
        (500, r#"{"detail": "boom"}"#.to_string())
    })
    .await;

    let client = client_for(addr, 10_000);
    let err = client.get("/chat/history").await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    // The underlying error is forwarded, not replaced.
    let source = err.source().expect("source chain intact");
    assert!(source.downcast_ref::<reqwest::Error>().is_some());
}

#[tokio::test]
async fn test_failure_logs_exactly_one_diagnostic_event() {
    let addr = common::start_backend(|_, path| async move {
        if path == "/kb/list" {
            (200, "[]".to_string())
        } else {
            (503, "{}".to_string())
        }
    })
    .await;

    let counter = common::ErrorEventCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = client_for(addr, 10_000);

    client.get("/sessions").await.unwrap_err();
    assert_eq!(counter.count(), 1, "failure logs once");

    client.get("/kb/list").await.unwrap();
    assert_eq!(counter.count(), 1, "success logs nothing");
}
