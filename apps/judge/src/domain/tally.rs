//! Tally: submissions bucketed by hand value.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::hand_types::Hand;

/// A parsed hand submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSubmission {
    pub author: String,
    pub hand: Hand,
    pub submitted_at: Option<OffsetDateTime>,
}

impl HandSubmission {
    pub fn new(author: impl Into<String>, hand: Hand) -> Self {
        Self {
            author: author.into(),
            hand,
            submitted_at: None,
        }
    }
}

/// How repeated submissions from the same author are counted, both toward
/// quorum and in the tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Every stored record counts, duplicates included.
    #[default]
    CountAll,
    /// Only the earliest record per author counts.
    FirstPerAuthor,
    /// Only the latest record per author counts.
    LatestPerAuthor,
}

impl DuplicatePolicy {
    /// Filter submissions in storage order according to the policy.
    ///
    /// Surviving submissions keep their relative storage order.
    pub fn apply(self, submissions: Vec<HandSubmission>) -> Vec<HandSubmission> {
        match self {
            DuplicatePolicy::CountAll => submissions,
            DuplicatePolicy::FirstPerAuthor => {
                let mut seen = HashSet::new();
                submissions
                    .into_iter()
                    .filter(|s| seen.insert(s.author.clone()))
                    .collect()
            }
            DuplicatePolicy::LatestPerAuthor => {
                let mut last_index: HashMap<&str, usize> = HashMap::new();
                for (i, s) in submissions.iter().enumerate() {
                    last_index.insert(s.author.as_str(), i);
                }
                let keep: HashSet<usize> = last_index.into_values().collect();
                submissions
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, s)| keep.contains(&i).then_some(s))
                    .collect()
            }
        }
    }

    /// Number of submissions that count toward quorum, given the authors of
    /// every stored record.
    pub fn quorum_count<'a, I>(self, authors: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            DuplicatePolicy::CountAll => authors.into_iter().count(),
            DuplicatePolicy::FirstPerAuthor | DuplicatePolicy::LatestPerAuthor => {
                authors.into_iter().collect::<HashSet<_>>().len()
            }
        }
    }
}

/// Submissions bucketed by hand. Every hand has a bucket; empty buckets are
/// empty, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    buckets: [Vec<HandSubmission>; 3],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_submissions<I>(submissions: I) -> Self
    where
        I: IntoIterator<Item = HandSubmission>,
    {
        let mut tally = Self::new();
        for s in submissions {
            tally.push(s);
        }
        tally
    }

    pub fn push(&mut self, submission: HandSubmission) {
        self.buckets[submission.hand.index()].push(submission);
    }

    pub fn bucket(&self, hand: Hand) -> &[HandSubmission] {
        &self.buckets[hand.index()]
    }

    /// Authors in the bucket for `hand`, in insertion order.
    pub fn authors(&self, hand: Hand) -> Vec<String> {
        self.bucket(hand).iter().map(|s| s.author.clone()).collect()
    }

    pub fn is_present(&self, hand: Hand) -> bool {
        !self.bucket(hand).is_empty()
    }

    /// Hands with at least one submission, in roster order.
    pub fn present(&self) -> Vec<Hand> {
        Hand::ALL
            .into_iter()
            .filter(|h| self.is_present(*h))
            .collect()
    }

    pub fn distinct_count(&self) -> usize {
        self.present().len()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
