use super::lenient;
use serde::Deserialize;

/// `/net_info` response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetInfoResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub result: NetInfoResult,
}

/// The `result` object of `/net_info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetInfoResult {
    /// Peers currently connected to the node, in the order the node reports
    /// them.
    #[serde(default, deserialize_with = "lenient")]
    pub peers: Vec<Peer>,
}

/// One connected peer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Peer {
    #[serde(default, deserialize_with = "lenient")]
    pub node_info: PeerNodeInfo,
}

/// The advertised identity of a peer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeerNodeInfo {
    /// Opaque node identifier.
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    /// Human-readable display name; may be empty.
    #[serde(default, deserialize_with = "lenient")]
    pub moniker: String,
}
