use fork_common::Fork;
use thiserror::Error;

use crate::key::ScopeKey;

/// Misuse of a scope. None of these are transient; retrying cannot help.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("no binding for {key} in scope")]
    AbsentBinding { key: ScopeKey },

    #[error("binding for {key} holds {found}, expected {expected}")]
    TypeMismatch {
        key: ScopeKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("activation predicate for {fork} is missing from chain scope")]
    MissingPredicate { fork: Fork },
}

/// Why a scope with a cancellation boundary stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Interrupted {
    #[error("scope cancelled")]
    Cancelled,

    #[error("scope deadline exceeded")]
    DeadlineExceeded,
}
