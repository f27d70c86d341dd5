use super::lenient;
use serde::Deserialize;
use serde_json::Value;

/// `/dump_consensus_state` response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsensusStateResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub result: ConsensusStateResult,
}

/// The `result` object of `/dump_consensus_state`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsensusStateResult {
    #[serde(default, deserialize_with = "lenient")]
    pub round_state: RoundState,
}

/// The subset of the consensus round state the pipeline consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundState {
    #[serde(default, deserialize_with = "lenient")]
    pub last_commit: LastCommit,
}

/// Votes that made it into the last commit.
///
/// The per-voter entries have no stable schema upstream; each one serializes
/// to a free-form descriptive string, so they are kept as raw JSON values and
/// handed to the vote extractor untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LastCommit {
    #[serde(default, deserialize_with = "lenient")]
    pub votes: Vec<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub votes_bit_array: String,
}

impl ConsensusStateResponse {
    /// The raw last-commit vote entries.
    pub fn last_commit_votes(&self) -> &[Value] {
        &self.result.round_state.last_commit.votes
    }
}
