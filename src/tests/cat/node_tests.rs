use crate::{CatClient, CatError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const NODE_COLUMNS: &str = "id,name,host,ip,fileDescriptorMax,diskUsed,diskTotal,diskUsedPercent";

fn create_test_client(mock_server: &MockServer) -> CatClient {
    let uri = url::Url::parse(&mock_server.uri()).unwrap();
    CatClient::builder()
        .host(uri.host_str().unwrap())
        .port(uri.port().unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_nodes_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/_cat/nodes"))
        .and(query_param("format", "json"))
        .and(query_param("full_id", "true"))
        .and(query_param("h", NODE_COLUMNS))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "gZc2R4dKQKiLrLJR-Xm4Vw",
                "name": "es-data-1",
                "host": "10.0.0.5",
                "ip": "10.0.0.5",
                "fileDescriptorMax": "1048576",
                "diskUsed": "27.4gb",
                "diskTotal": "100gb",
                "diskUsedPercent": "27.40"
            },
            {
                "id": "o_PhITFbT2ma9dAUQ1cZdQ",
                "name": "es-master-1",
                "host": null,
                "ip": "10.0.0.6"
            }
        ])))
        .mount(&mock_server)
        .await;

    let nodes = client.nodes().await.unwrap();
    assert_eq!(nodes.len(), 2);

    // Check first node: every requested column maps 1:1, values untouched.
    let node1 = &nodes[0];
    assert_eq!(node1.id, "gZc2R4dKQKiLrLJR-Xm4Vw");
    assert_eq!(node1.name, "es-data-1");
    assert_eq!(node1.host.as_deref(), Some("10.0.0.5"));
    assert_eq!(node1.ip.as_deref(), Some("10.0.0.5"));
    assert_eq!(node1.file_descriptor_max.as_deref(), Some("1048576"));
    assert_eq!(node1.disk_used.as_deref(), Some("27.4gb"));
    assert_eq!(node1.disk_total.as_deref(), Some("100gb"));
    // Numeric-looking values stay strings.
    assert_eq!(node1.disk_used_percent.as_deref(), Some("27.40"));

    // Check second node: null and omitted columns decode as absent.
    let node2 = &nodes[1];
    assert_eq!(node2.id, "o_PhITFbT2ma9dAUQ1cZdQ");
    assert_eq!(node2.name, "es-master-1");
    assert_eq!(node2.host, None);
    assert_eq!(node2.ip.as_deref(), Some("10.0.0.6"));
    assert_eq!(node2.file_descriptor_max, None);
    assert_eq!(node2.disk_used, None);
    assert_eq!(node2.disk_total, None);
    assert_eq!(node2.disk_used_percent, None);
}

#[tokio::test]
async fn test_nodes_list_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/_cat/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let nodes = client.nodes().await.unwrap();
    assert!(nodes.is_empty());
}

#[tokio::test]
async fn test_nodes_preserves_cluster_order() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/_cat/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "c", "name": "zeta"},
            {"id": "a", "name": "alpha"},
            {"id": "b", "name": "mike"}
        ])))
        .mount(&mock_server)
        .await;

    let nodes = client.nodes().await.unwrap();
    let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mike"]);
}

#[tokio::test]
async fn test_nodes_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/_cat/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":"a","name":"#))
        .mount(&mock_server)
        .await;

    let result = client.nodes().await;
    assert!(matches!(result, Err(CatError::Decode(_))));
}

#[tokio::test]
async fn test_nodes_wrong_shape_is_decode_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    // An object where an array of rows is expected.
    Mock::given(method("GET"))
        .and(path("/_cat/nodes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"nodes": []})),
        )
        .mount(&mock_server)
        .await;

    let result = client.nodes().await;
    assert!(matches!(result, Err(CatError::Decode(_))));
}

#[tokio::test]
async fn test_nodes_http_error_is_transport_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/_cat/nodes"))
        .respond_with(ResponseTemplate::new(503).set_body_string("cluster unavailable"))
        .mount(&mock_server)
        .await;

    match client.nodes().await {
        Err(CatError::Transport(message)) => {
            assert!(message.contains("503"), "message was: {}", message);
            assert!(message.contains("cluster unavailable"));
        }
        other => panic!("expected transport error, got {:?}", other.map(|n| n.len())),
    }
}
