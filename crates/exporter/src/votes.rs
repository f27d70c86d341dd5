//! Extraction of voter identifier tokens from last-commit vote entries.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static VOTE_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

/// A maximal run of uppercase letters or digits followed by a single space.
///
/// A rendered vote entry looks like
/// `Vote{0:ABCDEF012345 1129/00/2(Precommit) 8B01023386C3 @ ...}`; the first
/// such run is the truncated voter identifier. The trailing space anchors the
/// match so a run at the very end of the text (e.g. a trailing hash) does not
/// qualify on its own.
fn vote_token_regex() -> &'static Regex {
    VOTE_TOKEN_REGEX.get_or_init(|| Regex::new(r"([0-9A-Z]+) ").expect("vote token pattern"))
}

/// Extracts one identifier token per matching vote entry.
///
/// Entries are rendered to text (strings verbatim, anything else via its JSON
/// serialization) and the first pattern match is taken, without the trailing
/// space. Entries that do not match contribute nothing; this is expected for
/// absent votes, which serialize as `null`. Output preserves input order and
/// duplicates.
pub fn extract_vote_tokens(votes: &[Value]) -> Vec<String> {
    votes
        .iter()
        .filter_map(|vote| {
            let text = render_vote(vote);
            vote_token_regex()
                .captures(&text)
                .map(|captures| captures[1].to_string())
        })
        .collect()
}

fn render_vote(vote: &Value) -> String {
    match vote {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
