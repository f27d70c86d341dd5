//! Prometheus rendering of a scrape outcome.
//!
//! A fresh registry is built for every scrape, so series from a failed or
//! partial cycle are simply absent rather than stale.

use crate::scrape::ScrapeOutcome;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

/// Metric namespace; every family is prefixed with this.
pub const NAMESPACE: &str = "vega";

/// Renders one outcome in the Prometheus text exposition format.
pub fn render(outcome: &ScrapeOutcome) -> Result<String, prometheus::Error> {
    let registry = Registry::new();

    let up = Gauge::with_opts(
        Opts::new("up", "Was the last query of the node successful.").namespace(NAMESPACE),
    )?;
    registry.register(Box::new(up.clone()))?;
    up.set(bool_gauge(outcome.up));

    if outcome.up {
        let catching_up = Gauge::with_opts(
            Opts::new("sync_catching_up", "Is the node catching up?").namespace(NAMESPACE),
        )?;
        registry.register(Box::new(catching_up.clone()))?;
        catching_up.set(bool_gauge(outcome.catching_up));

        if !outcome.facts.is_empty() {
            let signing = GaugeVec::new(
                Opts::new(
                    "validator_signing",
                    "Flag indicating if a validator is signing or not (per validator).",
                )
                .namespace(NAMESPACE),
                &["validator"],
            )?;
            registry.register(Box::new(signing.clone()))?;
            for fact in &outcome.facts {
                signing
                    .with_label_values(&[&fact.validator])
                    .set(bool_gauge(fact.signed));
            }
        }
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
}

fn bool_gauge(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
