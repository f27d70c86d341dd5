//! HTTP-level tests for the node client against a mock upstream.

use url::Url;
use vega_config::TransportSettings;
use vega_rpc_client::{NodeClient, RpcError};

fn client_for(server: &mockito::ServerGuard) -> NodeClient {
    let endpoint: Url = server.url().parse().unwrap();
    NodeClient::new(endpoint, &TransportSettings::default()).unwrap()
}

#[tokio::test]
async fn status_decodes_catching_up_flag() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result": {"sync_info": {"catching_up": true}}}"#)
        .create_async()
        .await;

    let status = client_for(&server).status().await.unwrap();
    assert!(status.catching_up());
    mock.assert_async().await;
}

#[tokio::test]
async fn net_info_preserves_peer_order() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/net_info")
        .with_status(200)
        .with_body(
            r#"{"result": {"peers": [
                {"node_info": {"id": "AAAA", "moniker": "first"}},
                {"node_info": {"id": "BBBB", "moniker": "second"}}
            ]}}"#,
        )
        .create_async()
        .await;

    let net_info = client_for(&server).net_info().await.unwrap();
    let monikers: Vec<_> = net_info
        .result
        .peers
        .iter()
        .map(|p| p.node_info.moniker.as_str())
        .collect();
    assert_eq!(monikers, vec!["first", "second"]);
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/dump_consensus_state")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let err = client_for(&server)
        .dump_consensus_state()
        .await
        .unwrap_err();
    assert!(matches!(err, RpcError::Decode { .. }));
    assert_eq!(err.path(), Some("/dump_consensus_state"));
}

#[tokio::test]
async fn http_error_status_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/status")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = client_for(&server).status().await.unwrap_err();
    assert!(matches!(err, RpcError::Transport { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Port 1 is reserved and should refuse connections.
    let endpoint: Url = "http://127.0.0.1:1".parse().unwrap();
    let client = NodeClient::new(endpoint, &TransportSettings::default()).unwrap();

    let err = client.status().await.unwrap_err();
    assert!(matches!(err, RpcError::Transport { .. }));
    assert_eq!(err.path(), Some("/status"));
}
