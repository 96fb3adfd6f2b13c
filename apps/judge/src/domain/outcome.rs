//! Outcome judging: decide a battle from its tally.
//!
//! Pure and total. With one or three hand values in play the battle is a
//! draw (three-way ties are not resolved further). With exactly two values in
//! play, the absent value identifies the winner: the winner is the prey of
//! the absent hand, which is also the present hand that beats the other one.

use serde::Serialize;

use super::hand_types::Hand;
use super::tally::Tally;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Draw,
    Win { hand: Hand, authors: Vec<String> },
}

impl Outcome {
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    pub fn winning_hand(&self) -> Option<Hand> {
        match self {
            Outcome::Draw => None,
            Outcome::Win { hand, .. } => Some(*hand),
        }
    }
}

/// Elimination table: the hand that wins when `absent` was not thrown.
///
/// rock absent → scissor, scissor absent → paper, paper absent → rock.
pub fn winner_when_absent(absent: Hand) -> Hand {
    absent.prey()
}

/// Judge a tally.
///
/// Zero submissions is treated as a draw; it only happens when the caller
/// skipped the quorum wait or every record was rejected.
pub fn judge(tally: &Tally) -> Outcome {
    if tally.distinct_count() != 2 {
        return Outcome::Draw;
    }

    let Some(absent) = Hand::ALL.into_iter().find(|h| !tally.is_present(*h)) else {
        return Outcome::Draw;
    };
    let hand = winner_when_absent(absent);

    Outcome::Win {
        hand,
        authors: tally.authors(hand),
    }
}
