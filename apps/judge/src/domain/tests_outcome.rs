use crate::domain::{judge, winner_when_absent, Hand, HandSubmission, Outcome, Tally};

fn tally(pairs: &[(&str, Hand)]) -> Tally {
    Tally::from_submissions(pairs.iter().map(|(a, h)| HandSubmission::new(*a, *h)))
}

#[test]
fn elimination_table() {
    assert_eq!(winner_when_absent(Hand::Rock), Hand::Scissor);
    assert_eq!(winner_when_absent(Hand::Scissor), Hand::Paper);
    assert_eq!(winner_when_absent(Hand::Paper), Hand::Rock);
}

#[test]
fn same_hand_is_a_draw() {
    let t = tally(&[("taro", Hand::Rock), ("hanako", Hand::Rock)]);
    assert_eq!(judge(&t), Outcome::Draw);
}

#[test]
fn rock_beats_scissor() {
    let t = tally(&[("taro", Hand::Rock), ("hanako", Hand::Scissor)]);
    assert_eq!(
        judge(&t),
        Outcome::Win {
            hand: Hand::Rock,
            authors: vec!["taro".into()],
        }
    );
}

#[test]
fn all_three_hands_is_a_draw() {
    let t = tally(&[
        ("taro", Hand::Rock),
        ("hanako", Hand::Scissor),
        ("jiro", Hand::Paper),
    ]);
    assert!(judge(&t).is_draw());
}

#[test]
fn scissor_beats_paper_with_every_scissor_author() {
    let t = tally(&[
        ("taro", Hand::Scissor),
        ("hanako", Hand::Paper),
        ("jiro", Hand::Scissor),
    ]);
    let outcome = judge(&t);
    assert_eq!(outcome.winning_hand(), Some(Hand::Scissor));
    assert_eq!(
        outcome,
        Outcome::Win {
            hand: Hand::Scissor,
            authors: vec!["taro".into(), "jiro".into()],
        }
    );
}

#[test]
fn paper_beats_rock() {
    let t = tally(&[("taro", Hand::Rock), ("hanako", Hand::Paper)]);
    assert_eq!(judge(&t).winning_hand(), Some(Hand::Paper));
}

#[test]
fn empty_tally_is_a_draw() {
    assert_eq!(judge(&Tally::new()), Outcome::Draw);
}

#[test]
fn duplicate_author_counts_in_winning_list() {
    let t = tally(&[
        ("taro", Hand::Paper),
        ("taro", Hand::Paper),
        ("hanako", Hand::Rock),
    ]);
    assert_eq!(
        judge(&t),
        Outcome::Win {
            hand: Hand::Paper,
            authors: vec!["taro".into(), "taro".into()],
        }
    );
}

#[test]
fn outcome_serializes_with_result_tag() {
    let json = serde_json::to_value(Outcome::Win {
        hand: Hand::Rock,
        authors: vec!["taro".into()],
    })
    .unwrap();
    assert_eq!(json["result"], "win");
    assert_eq!(json["hand"], "rock");
    assert_eq!(serde_json::to_value(Outcome::Draw).unwrap()["result"], "draw");
}
