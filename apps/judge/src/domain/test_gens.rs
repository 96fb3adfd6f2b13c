// Proptest generators for domain types.
// Tallies are built valid by construction: the generators decide which hands
// are present up front instead of filtering afterwards.

use proptest::prelude::*;

use crate::domain::{Hand, HandSubmission};

/// Generate a random Hand
pub fn hand() -> impl Strategy<Value = Hand> {
    prop_oneof![Just(Hand::Rock), Just(Hand::Scissor), Just(Hand::Paper)]
}

/// Author names drawn from a small pool so duplicates occur naturally.
pub fn author() -> impl Strategy<Value = String> {
    (0u8..8).prop_map(|n| format!("player{n}"))
}

/// Any sequence of submissions, in storage order.
pub fn submissions(max: usize) -> impl Strategy<Value = Vec<HandSubmission>> {
    prop::collection::vec((author(), hand()), 0..=max).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(a, h)| HandSubmission::new(a, h))
            .collect()
    })
}

/// Merge two author lists into one storage order, driven by `picks`.
/// Relative order inside each list is preserved.
fn interleave(
    first: (Hand, Vec<String>),
    second: (Hand, Vec<String>),
    picks: Vec<bool>,
) -> Vec<HandSubmission> {
    let (ha, a) = first;
    let (hb, b) = second;
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();
    let mut picks = picks.into_iter();
    let mut out = Vec::new();
    loop {
        let take_first = match (a.peek().is_some(), b.peek().is_some()) {
            (false, false) => break,
            (true, false) => true,
            (false, true) => false,
            (true, true) => picks.next().unwrap_or(true),
        };
        if take_first {
            if let Some(author) = a.next() {
                out.push(HandSubmission::new(author, ha));
            }
        } else if let Some(author) = b.next() {
            out.push(HandSubmission::new(author, hb));
        }
    }
    out
}

/// Submissions where exactly two hands are present. Yields the absent hand too.
pub fn two_hand_submissions() -> impl Strategy<Value = (Hand, Vec<HandSubmission>)> {
    (
        hand(),
        prop::collection::vec(author(), 1..6),
        prop::collection::vec(author(), 1..6),
        prop::collection::vec(any::<bool>(), 0..12),
    )
        .prop_map(|(absent, a, b, picks)| {
            let present_a = absent.prey();
            let present_b = absent.predator();
            let merged = interleave((present_a, a), (present_b, b), picks);
            (absent, merged)
        })
}

/// Submissions where one hand or all three hands are present.
pub fn drawn_submissions() -> impl Strategy<Value = Vec<HandSubmission>> {
    prop_oneof![
        (hand(), prop::collection::vec(author(), 1..8)).prop_map(|(h, authors)| {
            authors
                .into_iter()
                .map(|a| HandSubmission::new(a, h))
                .collect()
        }),
        (
            prop::collection::vec(author(), 1..4),
            prop::collection::vec(author(), 1..4),
            prop::collection::vec(author(), 1..4),
        )
            .prop_map(|(r, s, p)| {
                let mut out = Vec::new();
                for (hand, authors) in [(Hand::Rock, r), (Hand::Scissor, s), (Hand::Paper, p)] {
                    out.extend(authors.into_iter().map(|a| HandSubmission::new(a, hand)));
                }
                out
            }),
    ]
}
