use crate::error::RpcError;
use crate::models::{ConsensusStateResponse, NetInfoResponse, StatusResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use vega_config::{TransportSettings, CONSENSUS_STATE_PATH, NET_INFO_PATH, STATUS_PATH};

/// Client for a node's diagnostic RPC endpoints.
///
/// Issues unauthenticated GET requests against a configured base endpoint.
/// Transport behavior (timeout, tolerance of self-signed certificates) is
/// taken from the [`TransportSettings`] passed at construction; there is no
/// process-global client state.
pub struct NodeClient {
    base_endpoint: Url,
    http_client: Client,
}

impl NodeClient {
    /// Creates a new client for the given base endpoint.
    pub fn new(endpoint: Url, transport: &TransportSettings) -> Result<Self, RpcError> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(transport.accept_invalid_certs)
            .timeout(transport.request_timeout)
            .build()
            .map_err(RpcError::ClientBuild)?;

        Ok(Self {
            base_endpoint: endpoint,
            http_client,
        })
    }

    /// The configured base endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.base_endpoint
    }

    /// Fetches the node status (sync state, catching-up flag).
    pub async fn status(&self) -> Result<StatusResponse, RpcError> {
        self.get_json(STATUS_PATH).await
    }

    /// Fetches network info (the connected peer list).
    pub async fn net_info(&self) -> Result<NetInfoResponse, RpcError> {
        self.get_json(NET_INFO_PATH).await
    }

    /// Fetches the consensus round-state dump (last-commit votes).
    pub async fn dump_consensus_state(&self) -> Result<ConsensusStateResponse, RpcError> {
        self.get_json(CONSENSUS_STATE_PATH).await
    }

    /// Issues one GET request and decodes the body.
    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, RpcError> {
        let url = join_path(&self.base_endpoint, path);
        debug!(%url, "querying upstream endpoint");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| RpcError::Transport { path, source })?;

        let body = response
            .bytes()
            .await
            .map_err(|source| RpcError::Transport { path, source })?;

        serde_json::from_slice(&body).map_err(|source| RpcError::Decode { path, source })
    }
}

/// Appends a relative RPC path to the base endpoint.
fn join_path(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_path_strips_trailing_slash() {
        let base: Url = "https://node.example.com:26657/".parse().unwrap();
        assert_eq!(
            join_path(&base, STATUS_PATH),
            "https://node.example.com:26657/status"
        );
    }

    #[test]
    fn join_path_without_trailing_slash() {
        let base: Url = "http://10.0.0.1:26657".parse().unwrap();
        assert_eq!(join_path(&base, NET_INFO_PATH), "http://10.0.0.1:26657/net_info");
    }
}
