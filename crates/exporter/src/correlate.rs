//! Join of the validator roster against extracted vote tokens.

use crate::registry::ValidatorIdentity;

/// The externally observable unit: did this validator's vote land in the
/// last commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningFact {
    /// Validator display name, used as the metric label.
    pub validator: String,
    /// True iff some vote token matched the validator's short identifier.
    pub signed: bool,
}

/// Produces one fact per roster entry, in roster order.
///
/// A validator is considered signing iff any token, trimmed of surrounding
/// whitespace, equals its (trimmed) short identifier exactly. Case-sensitive
/// full-token equality; no prefix or substring matching beyond the trim.
/// Set-membership only, so duplicate tokens and token order are irrelevant.
///
/// A full scan per validator is fine here: the roster is tens of entries and
/// the vote set is bounded by the validator count of a single block.
pub fn correlate(roster: &[ValidatorIdentity], tokens: &[String]) -> Vec<SigningFact> {
    roster
        .iter()
        .map(|validator| SigningFact {
            validator: validator.moniker.clone(),
            signed: tokens
                .iter()
                .any(|token| token.trim() == validator.short_id.trim()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(moniker: &str, full_id: &str) -> ValidatorIdentity {
        ValidatorIdentity {
            moniker: moniker.to_string(),
            full_id: full_id.to_string(),
            short_id: full_id[..12].to_string(),
        }
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn matching_token_marks_signed() {
        let roster = vec![identity("Foo", "ABCDEF012345XYZ")];
        let facts = correlate(&roster, &tokens(&["ABCDEF012345"]));
        assert_eq!(
            facts,
            vec![SigningFact {
                validator: "Foo".to_string(),
                signed: true
            }]
        );
    }

    #[test]
    fn no_matching_token_marks_unsigned() {
        let roster = vec![identity("Foo", "ABCDEF012345XYZ")];
        let facts = correlate(&roster, &tokens(&["ZZZZZZZZZZZZ"]));
        assert!(!facts[0].signed);
    }

    #[test]
    fn tokens_are_trimmed_before_comparison() {
        let roster = vec![identity("Foo", "ABCDEF012345XYZ")];
        let facts = correlate(&roster, &tokens(&["  ABCDEF012345 "]));
        assert!(facts[0].signed);
    }

    #[test]
    fn match_is_exact_not_prefix() {
        let roster = vec![identity("Foo", "ABCDEF012345XYZ")];
        // A longer token that merely starts with the short ID must not match.
        let facts = correlate(&roster, &tokens(&["ABCDEF012345XYZ"]));
        assert!(!facts[0].signed);
    }

    #[test]
    fn match_is_case_sensitive() {
        let roster = vec![identity("Foo", "ABCDEF012345XYZ")];
        let facts = correlate(&roster, &tokens(&["abcdef012345"]));
        assert!(!facts[0].signed);
    }

    #[test]
    fn token_order_is_irrelevant() {
        let roster = vec![
            identity("Foo", "AAAAAAAAAAAAXX"),
            identity("Bar", "BBBBBBBBBBBBYY"),
        ];
        let forward = correlate(&roster, &tokens(&["AAAAAAAAAAAA", "CCCCCCCCCCCC"]));
        let reversed = correlate(&roster, &tokens(&["CCCCCCCCCCCC", "AAAAAAAAAAAA"]));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn duplicate_tokens_are_harmless() {
        let roster = vec![identity("Foo", "AAAAAAAAAAAAXX")];
        let facts = correlate(&roster, &tokens(&["AAAAAAAAAAAA", "AAAAAAAAAAAA"]));
        assert!(facts[0].signed);
    }

    #[test]
    fn shared_prefix_yields_identical_facts() {
        // Two distinct full IDs with the same 12-character prefix cannot be
        // told apart; both match the shared token. Documented limitation of
        // the truncated join key.
        let roster = vec![
            identity("Foo", "ABCDEF012345AAA"),
            identity("Bar", "ABCDEF012345BBB"),
        ];
        let facts = correlate(&roster, &tokens(&["ABCDEF012345"]));
        assert!(facts[0].signed);
        assert!(facts[1].signed);
    }

    #[test]
    fn empty_roster_yields_no_facts() {
        assert!(correlate(&[], &tokens(&["AAAAAAAAAAAA"])).is_empty());
    }
}
