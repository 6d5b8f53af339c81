use std::collections::BTreeMap;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::errors::Interrupted;
use crate::scope::Scope;

#[derive(Clone, Debug)]
pub(crate) struct Boundary {
    token: CancellationToken,
    deadline: Option<Instant>,
}

/// Cancels the boundary it was created with, and every boundary below it.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once the boundary is cancelled or its deadline has passed.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.deadline.map_or(false, |d| d <= Instant::now())
    }
}

impl Scope {
    fn boundary(&self) -> Option<&Boundary> {
        self.layers().find_map(|layer| layer.boundary.as_ref())
    }

    fn with_boundary(&self, deadline: Option<Instant>) -> (Scope, CancelHandle) {
        let outer = self.boundary();
        let token = match outer {
            Some(b) => b.token.child_token(),
            None => CancellationToken::new(),
        };
        let deadline = match (outer.and_then(|b| b.deadline), deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        let handle = CancelHandle {
            token: token.clone(),
            deadline,
        };
        let scope = self.push(BTreeMap::new(), Some(Boundary { token, deadline }));
        (scope, handle)
    }

    /// New scope that stops when the returned handle, or any enclosing
    /// boundary, is cancelled. All bindings of `self` stay visible.
    pub fn with_cancel(&self) -> (Scope, CancelHandle) {
        self.with_boundary(None)
    }

    /// Like [`Scope::with_cancel`], also stopping at `deadline`. An enclosing
    /// deadline that is earlier still applies.
    pub fn with_deadline(&self, deadline: Instant) -> (Scope, CancelHandle) {
        self.with_boundary(Some(deadline))
    }

    /// A timeout too large to represent as an instant sets no deadline of its own.
    pub fn with_timeout(&self, timeout: Duration) -> (Scope, CancelHandle) {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.with_boundary(None),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.boundary().and_then(|b| b.deadline)
    }

    /// Why the scope stopped, if it did. Explicit cancellation is reported
    /// over an expired deadline.
    pub fn interruption(&self) -> Option<Interrupted> {
        let boundary = self.boundary()?;
        if boundary.token.is_cancelled() {
            return Some(Interrupted::Cancelled);
        }
        match boundary.deadline {
            Some(deadline) if deadline <= Instant::now() => Some(Interrupted::DeadlineExceeded),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.interruption().is_some()
    }

    /// Resolves once the scope is cancelled or its deadline passes. Never
    /// resolves for a scope without a boundary.
    pub async fn cancelled(&self) -> Interrupted {
        let Some(boundary) = self.boundary() else {
            return std::future::pending().await;
        };
        match boundary.deadline {
            Some(deadline) => tokio::select! {
                biased;
                _ = boundary.token.cancelled() => Interrupted::Cancelled,
                _ = tokio::time::sleep_until(deadline) => Interrupted::DeadlineExceeded,
            },
            None => {
                boundary.token.cancelled().await;
                Interrupted::Cancelled
            }
        }
    }
}
