//! Decoded shapes for the diagnostic endpoints.
//!
//! Each payload is modeled down to exactly the fields the signing pipeline
//! consumes; everything else the node returns is ignored.

mod consensus;
mod net_info;
mod status;

pub use consensus::{ConsensusStateResponse, ConsensusStateResult, LastCommit, RoundState};
pub use net_info::{NetInfoResponse, NetInfoResult, Peer, PeerNodeInfo};
pub use status::{StatusResponse, StatusResult, SyncInfo};

use serde::{Deserialize, Deserializer};

/// Decodes a field leniently: a value of the wrong shape (or JSON `null`)
/// yields the field's default instead of failing the surrounding payload.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
