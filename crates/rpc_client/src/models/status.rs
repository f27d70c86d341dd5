use super::lenient;
use serde::Deserialize;

/// `/status` response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub result: StatusResult,
}

/// The `result` object of `/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResult {
    #[serde(default, deserialize_with = "lenient")]
    pub sync_info: SyncInfo,
}

/// Sync state of the node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncInfo {
    /// True while the node is replaying blocks to catch up with the chain.
    #[serde(default, deserialize_with = "lenient")]
    pub catching_up: bool,
}

impl StatusResponse {
    /// Whether the node reports itself as catching up.
    pub fn catching_up(&self) -> bool {
        self.result.sync_info.catching_up
    }
}
