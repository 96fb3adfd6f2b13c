//! Hand parsing from stored string representations ("rock", "scissor", "paper").

use std::str::FromStr;

use super::hand_types::Hand;
use crate::errors::domain::BattleError;

impl FromStr for Hand {
    type Err = BattleError;

    /// Case-insensitive; surrounding whitespace is ignored. Anything outside
    /// the three values is a malformed submission, never a default bucket.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Hand::Rock),
            "scissor" => Ok(Hand::Scissor),
            "paper" => Ok(Hand::Paper),
            _ => Err(BattleError::malformed(s)),
        }
    }
}

/// Parse the hand of a stored submission, attributing failures to `author`.
pub fn parse_submission(author: &str, raw: &str) -> Result<Hand, BattleError> {
    raw.parse::<Hand>().map_err(|e| e.with_author(author))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_loose_forms() {
        assert_eq!("rock".parse::<Hand>(), Ok(Hand::Rock));
        assert_eq!("Scissor".parse::<Hand>(), Ok(Hand::Scissor));
        assert_eq!("  PAPER\n".parse::<Hand>(), Ok(Hand::Paper));
    }

    #[test]
    fn rejects_values_outside_the_three_hands() {
        for raw in ["", "scissors", "lizard", "グー", "rock paper"] {
            let err = raw.parse::<Hand>().unwrap_err();
            assert!(
                matches!(err, BattleError::MalformedSubmission { .. }),
                "{raw:?} should be malformed, got {err:?}"
            );
        }
    }

    #[test]
    fn parse_submission_names_the_author() {
        let err = parse_submission("hanako", "spock").unwrap_err();
        assert_eq!(
            err,
            BattleError::MalformedSubmission {
                author: Some("hanako".into()),
                value: "spock".into(),
            }
        );
    }

    #[test]
    fn as_str_round_trips() {
        for hand in Hand::ALL {
            assert_eq!(hand.as_str().parse::<Hand>(), Ok(hand));
        }
    }
}
