mod common;

use common::catalog_body;
use oklahoma_gl_pipeline::services::catalog::MetadataResolver;
use oklahoma_gl_pipeline::{MemoryEventSink, PipelineEvent, ResourceDescriptor};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn resolver(events: Arc<MemoryEventSink>) -> MetadataResolver {
    MetadataResolver::new(reqwest::Client::new(), events)
}

#[tokio::test]
async fn test_resolve_returns_only_csv_resources() {
    let mock_server = MockServer::start().await;
    let body = catalog_body(&[
        ("GL FY2022", "https://files.example/gl_fy2022.csv"),
        ("Data dictionary", "https://files.example/dictionary.pdf"),
        ("GL FY2023", "https://files.example/GL_FY2023.CSV"),
        ("Portal page", "https://files.example/general-ledger"),
        ("GL FY2024", "https://files.example/gl_fy2024.Csv"),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/3/action/package_show"))
        .and(query_param("id", "general-ledger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let events = Arc::new(MemoryEventSink::new());
    let api_url = format!("{}/api/3/action/package_show", mock_server.uri());
    let descriptors = resolver(events.clone())
        .resolve(&api_url, "general-ledger", TIMEOUT)
        .await
        .unwrap();

    assert_eq!(
        descriptors,
        vec![
            ResourceDescriptor::new("GL FY2022", "https://files.example/gl_fy2022.csv"),
            ResourceDescriptor::new("GL FY2023", "https://files.example/GL_FY2023.CSV"),
            ResourceDescriptor::new("GL FY2024", "https://files.example/gl_fy2024.Csv"),
        ]
    );
    assert_eq!(
        events.events(),
        vec![PipelineEvent::ResourcesResolved { count: 3 }]
    );
}

#[tokio::test]
async fn test_resolve_missing_resources_is_schema_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": true, "result": {"id": "gl"}})),
        )
        .mount(&mock_server)
        .await;

    let events = Arc::new(MemoryEventSink::new());
    let err = resolver(events.clone())
        .resolve(&mock_server.uri(), "general-ledger", TIMEOUT)
        .await
        .unwrap_err();

    assert!(err.is_schema(), "unexpected error: {err}");
    let recorded = events.events();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].is_failure());
}

#[tokio::test]
async fn test_resolve_missing_result_is_schema_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "error": "Not found"})),
        )
        .mount(&mock_server)
        .await;

    let err = resolver(Arc::new(MemoryEventSink::new()))
        .resolve(&mock_server.uri(), "general-ledger", TIMEOUT)
        .await
        .unwrap_err();

    assert!(err.is_schema());
}

#[tokio::test]
async fn test_resolve_non_json_body_is_schema_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = resolver(Arc::new(MemoryEventSink::new()))
        .resolve(&mock_server.uri(), "general-ledger", TIMEOUT)
        .await
        .unwrap_err();

    assert!(err.is_schema());
}

#[tokio::test]
async fn test_resolve_non_success_status_is_network_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let events = Arc::new(MemoryEventSink::new());
    let err = resolver(events.clone())
        .resolve(&mock_server.uri(), "general-ledger", TIMEOUT)
        .await
        .unwrap_err();

    assert!(err.is_network(), "unexpected error: {err}");
    assert!(matches!(
        events.events().as_slice(),
        [PipelineEvent::ResolveFailed { .. }]
    ));
}

#[tokio::test]
async fn test_resolve_timeout_is_network_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(catalog_body(&[]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let err = resolver(Arc::new(MemoryEventSink::new()))
        .resolve(&mock_server.uri(), "general-ledger", Duration::from_millis(200))
        .await
        .unwrap_err();

    assert!(err.is_network());
}
