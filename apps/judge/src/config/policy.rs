//! Battle timing and quorum policy.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::{DuplicatePolicy, Locale};
use crate::error::AppError;

pub const DEFAULT_MAX_ROUNDS: u32 = 3;
pub const DEFAULT_ROUND_SECS: u64 = 10;
pub const DEFAULT_QUORUM: usize = 2;

/// Fixed-round polling policy for one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattlePolicy {
    /// Number of polling rounds before the battle times out
    pub max_rounds: u32,
    /// Suspension before each round's count check
    pub round_duration: Duration,
    /// Submissions needed to proceed to judgment
    pub quorum_threshold: usize,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for BattlePolicy {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            round_duration: Duration::from_secs(DEFAULT_ROUND_SECS),
            quorum_threshold: DEFAULT_QUORUM,
            duplicate_policy: DuplicatePolicy::CountAll,
        }
    }
}

impl BattlePolicy {
    /// Read the policy from the environment, falling back to defaults:
    ///
    /// - `JANKEN_MAX_ROUNDS` (default 3)
    /// - `JANKEN_ROUND_SECS` (default 10)
    /// - `JANKEN_QUORUM` (default 2)
    /// - `JANKEN_DUPLICATES`: `count_all` | `first_per_author` | `latest_per_author`
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let policy = Self {
            max_rounds: parse_var("JANKEN_MAX_ROUNDS")?.unwrap_or(defaults.max_rounds),
            round_duration: parse_var::<u64>("JANKEN_ROUND_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.round_duration),
            quorum_threshold: parse_var("JANKEN_QUORUM")?.unwrap_or(defaults.quorum_threshold),
            duplicate_policy: match env::var("JANKEN_DUPLICATES") {
                Ok(v) => parse_duplicate_policy(&v)?,
                Err(_) => defaults.duplicate_policy,
            },
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_rounds == 0 {
            return Err(AppError::config("JANKEN_MAX_ROUNDS must be at least 1"));
        }
        if self.quorum_threshold == 0 {
            return Err(AppError::config("JANKEN_QUORUM must be at least 1"));
        }
        Ok(())
    }
}

/// Locale for announcement text from `JANKEN_LOCALE` (default `ja`).
pub fn locale_from_env() -> Result<Locale, AppError> {
    match env::var("JANKEN_LOCALE") {
        Ok(v) => v.parse::<Locale>().map_err(AppError::config),
        Err(_) => Ok(Locale::default()),
    }
}

fn parse_duplicate_policy(raw: &str) -> Result<DuplicatePolicy, AppError> {
    match raw.trim() {
        "count_all" => Ok(DuplicatePolicy::CountAll),
        "first_per_author" => Ok(DuplicatePolicy::FirstPerAuthor),
        "latest_per_author" => Ok(DuplicatePolicy::LatestPerAuthor),
        other => Err(AppError::config(format!(
            "JANKEN_DUPLICATES must be count_all, first_per_author or latest_per_author, got '{other}'"
        ))),
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} is not a valid number: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
