//! Version comparison deciding whether to prompt for an update

/// Outcome of comparing the storefront version with local state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptDecision {
    /// Storefront version is the installed one
    UpToDate,
    /// User already dismissed this exact version
    Skipped,
    /// Storefront version differs from both installed and skipped
    UpdateAvailable,
}

/// Compare the fetched version against the installed and last skipped ones
///
/// Versions are opaque strings: "1.0" and "1.0.0" are different versions and
/// neither is considered newer than the other.
pub fn decide(fetched: &str, installed: &str, last_skipped: &str) -> PromptDecision {
    if fetched == installed {
        PromptDecision::UpToDate
    } else if fetched == last_skipped {
        PromptDecision::Skipped
    } else {
        PromptDecision::UpdateAvailable
    }
}

/// Returns true if the user should be prompted to update
pub fn should_prompt(fetched: &str, installed: &str, last_skipped: &str) -> bool {
    decide(fetched, installed, last_skipped) == PromptDecision::UpdateAvailable
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.1", "2.0", "1.0", PromptDecision::UpdateAvailable)]
    #[case("2.0", "2.0", "1.0", PromptDecision::UpToDate)]
    #[case("2.1", "2.0", "2.1", PromptDecision::Skipped)]
    #[case("2.1", "2.1", "2.1", PromptDecision::UpToDate)]
    // Older storefront versions still prompt: there is no ordering
    #[case("1.9", "2.0", "1.0", PromptDecision::UpdateAvailable)]
    #[case("1.0.0", "1.0", "1.0", PromptDecision::UpdateAvailable)]
    #[case("v2.0", "2.0", "1.0", PromptDecision::UpdateAvailable)]
    #[case("", "2.0", "1.0", PromptDecision::UpdateAvailable)]
    fn decide_returns_expected_decision(
        #[case] fetched: &str,
        #[case] installed: &str,
        #[case] skipped: &str,
        #[case] expected: PromptDecision,
    ) {
        assert_eq!(decide(fetched, installed, skipped), expected);
    }

    #[test]
    fn should_prompt_matches_inequality_rule_for_all_combinations() {
        let values = ["1.0", "1.0.0", "2.0", "2.1", ""];
        for fetched in values {
            for installed in values {
                for skipped in values {
                    assert_eq!(
                        should_prompt(fetched, installed, skipped),
                        fetched != installed && fetched != skipped,
                        "fetched={fetched:?} installed={installed:?} skipped={skipped:?}"
                    );
                }
            }
        }
    }
}
