use glimpse::api::{ApiError, DataSource, HttpDataSource, ViewKind, parse_records};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

async fn mock_backend() -> MockServer {
    MockServer::start().await
}

fn source_for(server: &MockServer) -> HttpDataSource {
    HttpDataSource::new(server.uri())
}

// ============================================================================
// Menu Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_menu_success() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/api/getMenu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "table", "label": "Table"},
            {"id": 2, "name": "chart", "label": "Chart"},
            {"id": 3, "name": "about", "label": "About"}
        ])))
        .mount(&server)
        .await;

    let menu = source_for(&server).fetch_menu().await.unwrap();

    assert_eq!(menu.len(), 3);
    assert_eq!(menu[0].name, "table");
    assert_eq!(menu[0].kind(), ViewKind::Table);
    assert_eq!(menu[2].label, "About");
    assert_eq!(menu[2].resource_key(), "about");
}

#[tokio::test]
async fn test_fetch_menu_server_error_maps_to_status() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/api/getMenu"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_menu().await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_menu_malformed_body_maps_to_decode() {
    let server = mock_backend().await;

    // Valid JSON, wrong shape: decoding into the menu type fails.
    Mock::given(method("GET"))
        .and(path("/api/getMenu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a menu"})))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_menu().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

// ============================================================================
// Resource Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_resource_returns_record_array() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/api/rules/us_population_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"year": 2020, "population": 331449281},
            {"year": 2021, "population": 331893745}
        ])))
        .mount(&server)
        .await;

    let payload = source_for(&server)
        .fetch_resource("us_population_data")
        .await
        .unwrap();

    let records = parse_records(&payload).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].year, 2020);
    assert_eq!(records[1].population, 331_893_745);
}

#[tokio::test]
async fn test_fetch_resource_passes_arbitrary_json_through() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/api/rules/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "A dashboard.",
            "last_update": "2024-01-01 10:00:00"
        })))
        .mount(&server)
        .await;

    let payload = source_for(&server).fetch_resource("about").await.unwrap();

    assert_eq!(payload["content"], "A dashboard.");
    // A text payload is not a record series.
    assert!(parse_records(&payload).is_none());
}

#[tokio::test]
async fn test_fetch_resource_not_found_maps_to_status() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/api/rules/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such rule"))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .fetch_resource("missing")
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Status error, got {other:?}"),
    }
    assert!(err.to_string().contains("HTTP 404"));
}

#[tokio::test]
async fn test_fetch_resource_invalid_json_maps_to_decode() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/api/rules/about"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .fetch_resource("about")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

// ============================================================================
// Transport Failure Tests
// ============================================================================

#[tokio::test]
async fn test_unreachable_backend_maps_to_transport() {
    // Nothing is listening on this port.
    let source = HttpDataSource::new("http://127.0.0.1:9".to_string());

    let err = source.fetch_menu().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
    assert!(err.to_string().starts_with("network error"));
}
