//! Hand records as the store holds them.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A stored hand submission. `hand` is the raw stored value and may be
/// malformed; parsing happens when the battle is judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    pub author: String,
    pub hand: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
}

impl HandRecord {
    pub fn new(author: impl Into<String>, hand: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            hand: hand.into(),
            submitted_at: None,
        }
    }
}

/// DTO for appending a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCreate {
    pub author: String,
    pub hand: String,
}

impl HandCreate {
    pub fn new(author: impl Into<String>, hand: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            hand: hand.into(),
        }
    }
}
