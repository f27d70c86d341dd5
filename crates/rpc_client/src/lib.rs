//! Vega RPC Client Library
//!
//! This crate provides read-only access to the diagnostic HTTP endpoints of a
//! Vega (Tendermint-style) validator node: `/status`, `/net_info` and
//! `/dump_consensus_state`.
//!
//! The decoders are deliberately permissive: only the fields the signing
//! pipeline consumes are modeled, unknown fields are ignored, and a mistyped
//! or absent optional field decodes to its zero value instead of failing the
//! whole payload.

pub mod models;

mod error;
mod rpc_client;

pub use error::RpcError;
pub use rpc_client::NodeClient;

// Re-export commonly used types
pub use models::{ConsensusStateResponse, NetInfoResponse, StatusResponse};
