//! Battle-level error type used across domain, repos and services.
//!
//! This error type is HTTP- and DB-agnostic. Route handlers convert it into
//! `crate::error::AppError` through the provided `From` implementation.

use thiserror::Error;

/// Lifecycle rule that was broken. These indicate a driver bug, not user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LifecycleKind {
    /// `judge()` called before a successful quorum wait
    JudgeWithoutQuorum,
    /// `judge()` called a second time
    AlreadyJudged,
    /// `close()` called on an already closed battle
    AlreadyClosed,
    /// `close()` called before the wait timed out or judging finished
    CloseBeforeOutcome,
    /// `wait_for_quorum()` called after the wait already produced an outcome
    WaitAlreadyFinished,
}

/// Central battle error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// Read or write against the storage collaborator failed
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A stored hand carries a value outside rock/scissor/paper
    #[error("malformed submission{}: {value:?}", author_suffix(.author))]
    MalformedSubmission {
        author: Option<String>,
        value: String,
    },
    /// Coordinator methods invoked out of order
    #[error("lifecycle violation {kind:?}: {detail}")]
    LifecycleViolation { kind: LifecycleKind, detail: String },
}

fn author_suffix(author: &Option<String>) -> String {
    author
        .as_deref()
        .map(|a| format!(" from {a}"))
        .unwrap_or_default()
}

impl BattleError {
    pub fn storage(detail: impl Into<String>) -> Self {
        Self::StorageUnavailable(detail.into())
    }

    pub fn malformed(value: impl Into<String>) -> Self {
        Self::MalformedSubmission {
            author: None,
            value: value.into(),
        }
    }

    pub fn lifecycle(kind: LifecycleKind, detail: impl Into<String>) -> Self {
        Self::LifecycleViolation {
            kind,
            detail: detail.into(),
        }
    }

    /// Attach the submitting author to a malformed-submission error.
    pub fn with_author(self, who: impl Into<String>) -> Self {
        match self {
            Self::MalformedSubmission { value, .. } => Self::MalformedSubmission {
                author: Some(who.into()),
                value,
            },
            other => other,
        }
    }
}

impl From<sea_orm::DbErr> for BattleError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}
