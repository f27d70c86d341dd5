//! Vega Signing Exporter Core
//!
//! Turns one round of a node's diagnostic payloads into per-validator
//! signing facts and renders them in the Prometheus text format.
//!
//! The pipeline is three small stages on top of the decoded payloads:
//!
//! 1. [`votes::extract_vote_tokens`] pulls short identifier tokens out of the
//!    free-form last-commit vote entries.
//! 2. [`registry::build_registry`] derives the validator roster from the
//!    net-info peer list.
//! 3. [`correlate::correlate`] joins the two by exact trimmed-string equality
//!    on the 12-character short identifier.
//!
//! The join key is a truncated node identifier because the vote entries carry
//! nothing better; two validators sharing a 12-character prefix are
//! indistinguishable to this pipeline. That limitation comes from the
//! upstream data, not from this implementation.

pub mod correlate;
pub mod metrics;
pub mod registry;
pub mod scrape;
pub mod votes;

pub use correlate::SigningFact;
pub use registry::ValidatorIdentity;
pub use scrape::{ScrapeOutcome, Scraper};
