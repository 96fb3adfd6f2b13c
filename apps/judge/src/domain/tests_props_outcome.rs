//! Property-based tests for outcome judging

use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::{judge, DuplicatePolicy, Hand, Outcome, Tally};

proptest! {
    #![proptest_config(judge_test_support::proptest_config::proptest_config())]

    /// Property: one or three hands in play is always a draw.
    #[test]
    fn prop_one_or_three_hands_draw(subs in test_gens::drawn_submissions()) {
        let tally = Tally::from_submissions(subs);
        prop_assert!(matches!(tally.distinct_count(), 1 | 3));
        prop_assert_eq!(judge(&tally), Outcome::Draw);
    }

    /// Property: with two hands in play the elimination table picks the
    /// winner, and the winners are exactly that bucket in storage order.
    #[test]
    fn prop_two_hands_follow_elimination_table(
        (absent, subs) in test_gens::two_hand_submissions(),
    ) {
        let expected_hand = match absent {
            Hand::Rock => Hand::Scissor,
            Hand::Scissor => Hand::Paper,
            Hand::Paper => Hand::Rock,
        };
        let expected_authors: Vec<String> = subs
            .iter()
            .filter(|s| s.hand == expected_hand)
            .map(|s| s.author.clone())
            .collect();

        let tally = Tally::from_submissions(subs);
        prop_assert_eq!(tally.distinct_count(), 2);

        match judge(&tally) {
            Outcome::Win { hand, authors } => {
                prop_assert_eq!(hand, expected_hand);
                prop_assert_eq!(authors, expected_authors);
                // The winner beats the other hand in play.
                let loser = tally.present().into_iter().find(|h| *h != hand).unwrap();
                prop_assert!(hand.beats(loser));
            }
            Outcome::Draw => prop_assert!(false, "two hands must produce a winner"),
        }
    }

    /// Property: judging is deterministic and does not touch the tally.
    #[test]
    fn prop_judge_is_deterministic(subs in test_gens::submissions(12)) {
        let tally = Tally::from_submissions(subs);
        let snapshot = tally.clone();
        let first = judge(&tally);
        let second = judge(&tally);
        prop_assert_eq!(first, second);
        prop_assert_eq!(tally, snapshot);
    }

    /// Property: tallying partitions submissions; nothing is lost or duplicated.
    #[test]
    fn prop_tally_partitions_submissions(subs in test_gens::submissions(16)) {
        let total = subs.len();
        let tally = Tally::from_submissions(subs.clone());
        prop_assert_eq!(tally.len(), total);
        for hand in Hand::ALL {
            let expected: Vec<String> = subs
                .iter()
                .filter(|s| s.hand == hand)
                .map(|s| s.author.clone())
                .collect();
            prop_assert_eq!(tally.authors(hand), expected);
        }
    }

    /// Property: deduplicating policies leave at most one submission per author.
    #[test]
    fn prop_dedup_policies_leave_one_per_author(subs in test_gens::submissions(16)) {
        for policy in [DuplicatePolicy::FirstPerAuthor, DuplicatePolicy::LatestPerAuthor] {
            let kept = policy.apply(subs.clone());
            let quorum = policy.quorum_count(subs.iter().map(|s| s.author.as_str()));
            prop_assert_eq!(kept.len(), quorum);
            let mut authors: Vec<&str> = kept.iter().map(|s| s.author.as_str()).collect();
            authors.sort_unstable();
            authors.dedup();
            prop_assert_eq!(authors.len(), kept.len());
        }
    }
}
