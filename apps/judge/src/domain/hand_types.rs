//! Core hand types: the three values a participant can throw.

use std::fmt;

/// One rock-paper-scissors hand value.
///
/// `Ord` follows the roster order (rock, scissor, paper) and is only used
/// for stable iteration; use [`Hand::beats`] for game logic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Hand {
    Rock,
    Scissor,
    Paper,
}

impl Hand {
    /// Every hand value in roster order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissor, Hand::Paper];

    /// Stored/wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Scissor => "scissor",
            Hand::Paper => "paper",
        }
    }

    /// The hand this one defeats: rock > scissor > paper > rock.
    pub fn prey(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissor,
            Hand::Scissor => Hand::Paper,
            Hand::Paper => Hand::Rock,
        }
    }

    /// The hand that defeats this one.
    pub fn predator(self) -> Hand {
        match self {
            Hand::Rock => Hand::Paper,
            Hand::Scissor => Hand::Rock,
            Hand::Paper => Hand::Scissor,
        }
    }

    pub fn beats(self, other: Hand) -> bool {
        self.prey() == other
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Hand::Rock => 0,
            Hand::Scissor => 1,
            Hand::Paper => 2,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
