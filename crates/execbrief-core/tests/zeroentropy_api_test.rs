//! Integration tests for the ZeroEntropy client against an in-process mock
//! of the vendor API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use execbrief_core::{ProgressSink, ZeroEntropyClient, ZeroEntropyConfig};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct MockState {
    collection_calls: AtomicUsize,
    document_calls: AtomicUsize,
    status_calls: AtomicUsize,
    /// Collection creation behavior per call index: 0 = ok, 409, 500...
    collection_statuses: Vec<u16>,
    /// Every document upload fails when set.
    fail_documents: bool,
    snippets: Value,
}

type SharedState = Arc<MockState>;

async fn add_collection(State(state): State<SharedState>) -> (StatusCode, Json<Value>) {
    let call = state.collection_calls.fetch_add(1, Ordering::SeqCst);
    let status = state
        .collection_statuses
        .get(call)
        .copied()
        .unwrap_or(200);
    match status {
        200 => (StatusCode::OK, Json(json!({"message": "created"}))),
        409 => (
            StatusCode::CONFLICT,
            Json(json!({"detail": "Collection already exists"})),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "boom"})),
        ),
    }
}

async fn add_document(State(state): State<SharedState>) -> (StatusCode, Json<Value>) {
    state.document_calls.fetch_add(1, Ordering::SeqCst);
    if state.fail_documents {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": "unparseable"})),
        )
    } else {
        (StatusCode::OK, Json(json!({"message": "ok"})))
    }
}

async fn get_status(State(state): State<SharedState>) -> Json<Value> {
    state.status_calls.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "num_documents": 5,
        "num_parsing_documents": 0,
        "num_indexing_documents": 0,
        "num_indexed_documents": 5,
        "num_failed_documents": 0
    }))
}

async fn top_snippets(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({"results": state.snippets.clone()}))
}

async fn get_collection_list() -> Json<Value> {
    Json(json!({
        "collection_names": ["synthesis_comparison_demo", "archive"]
    }))
}

async fn spawn_mock(state: MockState) -> (SocketAddr, SharedState) {
    let shared = Arc::new(state);
    let app = Router::new()
        .route("/collections/add-collection", post(add_collection))
        .route("/documents/add-document", post(add_document))
        .route("/status/get-status", post(get_status))
        .route("/queries/top-snippets", post(top_snippets))
        .route("/collections/get-collection-list", post(get_collection_list))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, shared)
}

fn client_for(addr: SocketAddr) -> ZeroEntropyClient {
    ZeroEntropyClient::new(ZeroEntropyConfig {
        base_url: format!("http://{}", addr),
        collection_name: "synthesis_comparison_demo".to_string(),
        api_key: Some("test-key".to_string()),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn create_collection_treats_conflict_as_success() {
    let (addr, state) = spawn_mock(MockState {
        collection_statuses: vec![200, 409],
        ..Default::default()
    })
    .await;
    let client = client_for(addr);

    client.create_collection().await.unwrap();
    client.create_collection().await.unwrap();
    assert_eq!(state.collection_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn create_collection_propagates_other_failures() {
    let (addr, _state) = spawn_mock(MockState {
        collection_statuses: vec![500],
        ..Default::default()
    })
    .await;
    let client = client_for(addr);

    let err = client.create_collection().await.unwrap_err();
    assert_eq!(err.upstream_status(), Some(500));
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn get_collections_lists_account_collections() {
    let (addr, _state) = spawn_mock(MockState::default()).await;
    let client = client_for(addr);

    let names = client.get_collections().await.unwrap();
    assert_eq!(names, vec!["synthesis_comparison_demo", "archive"]);
}

#[tokio::test]
async fn load_documents_survives_document_failures() {
    let (addr, state) = spawn_mock(MockState {
        fail_documents: true,
        ..Default::default()
    })
    .await;
    let client = client_for(addr);

    let (progress, mut rx) = ProgressSink::channel();
    client.load_documents(&progress).await.unwrap();
    drop(progress);

    // Every upload was attempted and failed, yet the load completed.
    assert_eq!(state.document_calls.load(Ordering::SeqCst), 5);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    assert_eq!(events.first().map(|e| e.percent), Some(0.0));
    let last = events.last().unwrap();
    assert_eq!(last.percent, 100.0);
    assert!(last.message.contains("loaded and indexed 5 documents"));
}

#[tokio::test]
async fn load_documents_stops_polling_once_indexed() {
    let (addr, state) = spawn_mock(MockState::default()).await;
    let client = client_for(addr);

    client.load_documents(&ProgressSink::discard()).await.unwrap();
    // The mock reports fully indexed on the first snapshot.
    assert_eq!(state.status_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn live_synthesis_counts_distinct_documents_and_caps_confidence() {
    let snippet = |path: &str| {
        json!({
            "path": path,
            "start_index": 0,
            "end_index": 42,
            "page_span": [0, 1],
            "content": "Credit Loss Provisions: $45M (1.2% of loan portfolio)",
            "score": 0.99
        })
    };
    let (addr, _state) = spawn_mock(MockState {
        snippets: json!([
            snippet("finance/compliance-assessment-2024.md"),
            snippet("finance/compliance-assessment-2024.md"),
            snippet("tech/strategic-plan-2024.md"),
            snippet("legal/quarterly-analysis-q3.md"),
        ]),
        ..Default::default()
    })
    .await;
    let client = client_for(addr);

    let result = client
        .synthesize("credit risk exposure", &ProgressSink::discard())
        .await
        .unwrap();

    // 4 snippets from 3 distinct source paths
    assert_eq!(result.documents_searched, 3);
    // Mean score 0.99 is clamped to exactly 0.95.
    assert_eq!(result.confidence_score, 0.95);
    assert!(result.query_id.starts_with("api-"));
    assert!(result.processing_time >= 0.0);
    assert!(result
        .synthesis
        .starts_with("Based on analysis of 3 documents"));
    assert!(result.synthesis.contains("**Key Risk Areas Identified:**"));
}

#[tokio::test]
async fn live_synthesis_with_no_snippets_reports_not_found() {
    let (addr, _state) = spawn_mock(MockState {
        snippets: json!([]),
        ..Default::default()
    })
    .await;
    let client = client_for(addr);

    let result = client
        .synthesize("undocumented topic", &ProgressSink::discard())
        .await
        .unwrap();
    assert!(result.synthesis.contains("couldn't find specific information"));
    assert_eq!(result.documents_searched, 0);
    assert_eq!(result.confidence_score, 0.0);
}

#[tokio::test(start_paused = true)]
async fn end_to_end_demo_mode_risk_query() {
    // No key configured: the whole flow runs in demo mode.
    let client = ZeroEntropyClient::new(ZeroEntropyConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        collection_name: "synthesis_comparison_demo".to_string(),
        api_key: None,
        timeout_secs: 5,
    })
    .unwrap();

    let (progress, mut rx) = ProgressSink::channel();
    client.load_documents(&progress).await.unwrap();
    drop(progress);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    assert_eq!(events.first().map(|e| e.percent), Some(0.0));
    assert_eq!(events.last().map(|e| e.percent), Some(100.0));
    assert_eq!(
        events.last().map(|e| e.message.as_str()),
        Some("Loaded 5 documents in demo mode")
    );

    let result = client
        .synthesize("What are our biggest risks right now?", &ProgressSink::discard())
        .await
        .unwrap();
    assert!(result.synthesis.starts_with("**Demo Mode - Risk Analysis:**"));
    assert!(result.query_id.starts_with("demo-"));
}
