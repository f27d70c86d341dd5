//! Vega signing exporter binary.
//!
//! Serves a Prometheus metrics endpoint; every scrape triggers one poll of
//! the configured node's diagnostic RPC endpoints and republishes the
//! per-validator signing gauges.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url::Url;
use vega_config::{
    ExporterConfig, TransportSettings, DEFAULT_LISTEN_ADDRESS, DEFAULT_METRICS_PATH,
    ENDPOINT_ENV_VAR,
};
use vega_exporter::Scraper;
use vega_rpc_client::NodeClient;

mod server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Command::new("vega-exporter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prometheus exporter for Vega validator signing status")
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .value_name("URL")
                .env(ENDPOINT_ENV_VAR)
                .required(true)
                .help("Base URL of the node's RPC interface"),
        )
        .arg(
            Arg::new("listen-address")
                .long("listen-address")
                .value_name("ADDR")
                .default_value(DEFAULT_LISTEN_ADDRESS)
                .help("Address to listen on for telemetry"),
        )
        .arg(
            Arg::new("metrics-path")
                .long("metrics-path")
                .value_name("PATH")
                .default_value(DEFAULT_METRICS_PATH)
                .help("Path under which to expose metrics"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .default_value("10")
                .help("Upstream request timeout in seconds"),
        )
        .arg(
            Arg::new("verify-tls")
                .long("verify-tls")
                .action(ArgAction::SetTrue)
                .help(
                    "Verify the node's TLS certificate (disabled by default \
                     to tolerate self-signed node certificates)",
                ),
        )
        .get_matches();

    let config = build_config(
        matches.get_one::<String>("endpoint").expect("required"),
        matches.get_one::<String>("listen-address").expect("defaulted"),
        matches.get_one::<String>("metrics-path").expect("defaulted"),
        matches.get_one::<String>("timeout").expect("defaulted"),
        matches.get_flag("verify-tls"),
    )?;

    info!(endpoint = %config.endpoint, "starting vega-exporter");
    if config.transport.accept_invalid_certs {
        info!("upstream TLS certificate verification is disabled");
    }

    let client = NodeClient::new(config.endpoint.clone(), &config.transport)
        .context("failed to build node client")?;
    let scraper = Scraper::new(client);

    if let Err(err) = server::run(&config, scraper).await {
        error!(error = %err, "exporter server failed");
        return Err(err);
    }

    Ok(())
}

/// Assembles the exporter configuration from raw flag values.
fn build_config(
    endpoint: &str,
    listen_address: &str,
    metrics_path: &str,
    timeout_secs: &str,
    verify_tls: bool,
) -> Result<ExporterConfig> {
    let endpoint: Url = endpoint
        .parse()
        .with_context(|| format!("invalid endpoint URL: {endpoint}"))?;
    let listen_address: SocketAddr = listen_address
        .parse()
        .with_context(|| format!("invalid listen address: {listen_address}"))?;
    let timeout_secs: u64 = timeout_secs
        .parse()
        .with_context(|| format!("invalid timeout: {timeout_secs}"))?;

    let mut config = ExporterConfig::new(endpoint);
    config.listen_address = listen_address;
    config.metrics_path = metrics_path.to_string();
    config.transport = TransportSettings {
        accept_invalid_certs: !verify_tls,
        request_timeout: Duration::from_secs(timeout_secs),
    };
    Ok(config)
}
