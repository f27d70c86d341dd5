//! RPC client error types

use thiserror::Error;

/// Errors raised while querying a node's diagnostic endpoints.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Network or TLS failure reaching the upstream node.
    #[error("transport error querying {path}: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Malformed or unexpected JSON in the upstream response.
    #[error("failed to decode {path} response: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to construct the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl RpcError {
    /// The relative endpoint path the error occurred on, if any.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            RpcError::Transport { path, .. } | RpcError::Decode { path, .. } => Some(path),
            RpcError::ClientBuild(_) => None,
        }
    }
}
