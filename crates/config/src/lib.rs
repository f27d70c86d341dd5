//! Vega Exporter Configuration Module
//!
//! This module provides configuration types for the Vega signing exporter:
//! the upstream node endpoint, the telemetry listen address, and the
//! transport settings used for the diagnostic RPC requests.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Length of the short validator identifier derived from a node ID.
///
/// Last-commit vote entries only carry a truncated form of the voter's node
/// identifier, so the roster is correlated against votes on this fixed-length
/// prefix. This reflects an upstream limitation, not a tunable.
pub const SHORT_ID_LEN: usize = 12;

/// Default telemetry listen address.
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:9141";
/// Default path under which metrics are exposed.
pub const DEFAULT_METRICS_PATH: &str = "/metrics";
/// Default upstream request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable consulted for the upstream endpoint when no
/// `--endpoint` flag is given.
pub const ENDPOINT_ENV_VAR: &str = "VEGA_ENDPOINT";

/// Diagnostic RPC paths queried on the upstream node.
pub const STATUS_PATH: &str = "/status";
pub const NET_INFO_PATH: &str = "/net_info";
pub const CONSENSUS_STATE_PATH: &str = "/dump_consensus_state";

/// Transport settings for upstream requests.
///
/// Validator nodes routinely serve their diagnostic endpoints behind
/// self-signed certificates, so certificate verification is disabled by
/// default. The flag is carried explicitly here rather than hidden in a
/// process-global client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportSettings {
    /// Accept self-signed/invalid upstream TLS certificates.
    pub accept_invalid_certs: bool,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Complete exporter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Base URL of the upstream node's RPC interface. Required, no default.
    pub endpoint: Url,
    /// Address the telemetry HTTP server binds to.
    pub listen_address: SocketAddr,
    /// Path under which metrics are exposed.
    pub metrics_path: String,
    /// Upstream transport settings.
    pub transport: TransportSettings,
}

impl ExporterConfig {
    /// Builds a configuration from an already-validated endpoint, applying
    /// defaults for everything else.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            listen_address: DEFAULT_LISTEN_ADDRESS
                .parse()
                .expect("default listen address is valid"),
            metrics_path: DEFAULT_METRICS_PATH.to_string(),
            transport: TransportSettings::default(),
        }
    }
}
