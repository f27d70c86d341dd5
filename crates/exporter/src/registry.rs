//! Derivation of the validator roster from the net-info peer list.

use tracing::warn;
use vega_config::SHORT_ID_LEN;
use vega_rpc_client::models::NetInfoResponse;

/// One known validator, derived fresh every cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorIdentity {
    /// Advertised display name; may be empty.
    pub moniker: String,
    /// Opaque full node identifier.
    pub full_id: String,
    /// First [`SHORT_ID_LEN`] bytes of `full_id`; the correlation key.
    pub short_id: String,
}

/// Builds the roster, one identity per peer in peer-list order.
///
/// Peers whose node identifier is too short to yield a full-length prefix are
/// skipped with a warning rather than failing the cycle. No deduplication is
/// performed; a duplicate peer entry yields a duplicate identity.
pub fn build_registry(net_info: &NetInfoResponse) -> Vec<ValidatorIdentity> {
    net_info
        .result
        .peers
        .iter()
        .filter_map(|peer| {
            let info = &peer.node_info;
            match info.id.get(..SHORT_ID_LEN) {
                Some(prefix) => Some(ValidatorIdentity {
                    moniker: info.moniker.clone(),
                    full_id: info.id.clone(),
                    short_id: prefix.to_string(),
                }),
                None => {
                    warn!(
                        moniker = %info.moniker,
                        node_id = %info.id,
                        "peer node ID shorter than {} characters, skipping entry",
                        SHORT_ID_LEN
                    );
                    None
                }
            }
        })
        .collect()
}
