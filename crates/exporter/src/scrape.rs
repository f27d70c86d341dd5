//! One fetch-decode-correlate cycle against the upstream node.

use crate::correlate::{correlate, SigningFact};
use crate::registry::build_registry;
use crate::votes::extract_vote_tokens;
use tracing::{debug, warn};
use vega_rpc_client::NodeClient;

/// The aggregate result of one scrape cycle.
///
/// Constructed fresh at the start of a cycle and discarded after rendering;
/// nothing is carried across cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOutcome {
    /// Whether the status query succeeded. When false, no other series are
    /// meaningful for this cycle.
    pub up: bool,
    /// Whether the node reports itself as catching up. Only published when
    /// `up` is true.
    pub catching_up: bool,
    /// One signing fact per known validator. Empty when the roster or
    /// consensus stage failed.
    pub facts: Vec<SigningFact>,
}

impl ScrapeOutcome {
    /// The outcome of a cycle whose status stage failed.
    pub fn down() -> Self {
        Self {
            up: false,
            catching_up: false,
            facts: Vec::new(),
        }
    }
}

/// Runs scrape cycles against one upstream node.
pub struct Scraper {
    client: NodeClient,
}

impl Scraper {
    pub fn new(client: NodeClient) -> Self {
        Self { client }
    }

    /// Runs one cycle: status, roster, consensus dump, correlation.
    ///
    /// Failure policy, per stage:
    /// - status failure degrades the whole cycle to `up = false`;
    /// - roster or consensus failure keeps the cycle up but skips the signing
    ///   facts for this cycle only.
    ///
    /// No upstream failure is ever fatal to the process.
    pub async fn scrape(&self) -> ScrapeOutcome {
        let status = match self.client.status().await {
            Ok(status) => status,
            Err(err) => {
                warn!(error = %err, "status query failed, reporting node down");
                return ScrapeOutcome::down();
            }
        };
        let catching_up = status.catching_up();

        let net_info = match self.client.net_info().await {
            Ok(net_info) => net_info,
            Err(err) => {
                warn!(error = %err, "net_info query failed, skipping signing facts");
                return ScrapeOutcome {
                    up: true,
                    catching_up,
                    facts: Vec::new(),
                };
            }
        };

        let consensus = match self.client.dump_consensus_state().await {
            Ok(consensus) => consensus,
            Err(err) => {
                warn!(error = %err, "consensus dump query failed, skipping signing facts");
                return ScrapeOutcome {
                    up: true,
                    catching_up,
                    facts: Vec::new(),
                };
            }
        };

        let tokens = extract_vote_tokens(consensus.last_commit_votes());
        let roster = build_registry(&net_info);
        debug!(?tokens, "extracted last-commit vote tokens");
        debug!(?roster, "derived validator roster");

        let facts = correlate(&roster, &tokens);
        debug!(validators = facts.len(), "scrape cycle complete");

        ScrapeOutcome {
            up: true,
            catching_up,
            facts,
        }
    }
}
