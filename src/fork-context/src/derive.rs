use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use fork_common::{BlockNumber, Fork};
use log::{debug, trace, warn};
use num_bigint::BigUint;
use strum::{EnumCount, IntoEnumIterator};
use tokio::time::Instant;

use crate::cancel::CancelHandle;
use crate::errors::ScopeError;
use crate::flags::ForkFlags;
use crate::key::ScopeKey;
use crate::schedule::ForkSchedule;
use crate::scope::Scope;
use crate::value::ScopeValue;

/// Scope holding the chain id and the activation predicate of every fork.
#[derive(Clone, Debug)]
pub struct ChainScope(Scope);

/// Chain scope extended with a block number and the flags evaluated at it.
#[derive(Clone, Debug)]
pub struct BlockScope(Scope);

macro_rules! impl_carrier {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn scope(&self) -> &Scope {
                    &self.0
                }

                pub fn into_scope(self) -> Scope {
                    self.0
                }

                pub fn with_value(&self, key: ScopeKey, value: impl Into<ScopeValue>) -> Self {
                    $name(self.0.with_value(key, value))
                }

                pub fn with_cancel(&self) -> (Self, CancelHandle) {
                    let (scope, handle) = self.0.with_cancel();
                    ($name(scope), handle)
                }

                pub fn with_timeout(&self, timeout: Duration) -> (Self, CancelHandle) {
                    let (scope, handle) = self.0.with_timeout(timeout);
                    ($name(scope), handle)
                }

                pub fn with_deadline(&self, deadline: Instant) -> (Self, CancelHandle) {
                    let (scope, handle) = self.0.with_deadline(deadline);
                    ($name(scope), handle)
                }
            }

            impl Deref for $name {
                type Target = Scope;

                fn deref(&self) -> &Scope {
                    &self.0
                }
            }

            impl AsRef<Scope> for $name {
                fn as_ref(&self) -> &Scope {
                    &self.0
                }
            }

            impl From<$name> for Scope {
                fn from(value: $name) -> Scope {
                    value.0
                }
            }
        )*
    };
}

impl_carrier!(ChainScope, BlockScope);

impl ChainScope {
    pub fn derive<S: ForkSchedule>(schedule: Arc<S>) -> Self {
        Self::derive_on(&Scope::root(), schedule)
    }

    /// Derives chain scope on top of `parent`, keeping whatever it already binds.
    pub fn derive_on<S: ForkSchedule>(parent: &Scope, schedule: Arc<S>) -> Self {
        let chain_id = match schedule.chain_id() {
            Some(id) => id.clone(),
            None => {
                warn!("chain id is not configured, binding zero");
                BigUint::default()
            }
        };
        debug!("deriving chain scope for chain id {chain_id}");

        let mut bindings = Vec::with_capacity(Fork::COUNT + 1);
        for fork in Fork::iter() {
            let schedule = Arc::clone(&schedule);
            bindings.push((
                ScopeKey::Predicate(fork),
                ScopeValue::predicate(move |block| schedule.is_fork_active(fork, block)),
            ));
        }
        bindings.push((ScopeKey::ChainId, ScopeValue::ChainId(chain_id)));

        ChainScope(parent.with_values(bindings))
    }

    pub fn at_block(&self, block: BlockNumber) -> Result<BlockScope, ScopeError> {
        derive_block_scope(&self.0, block)
    }
}

/// Evaluates every fork predicate reachable from `scope` at `block`.
///
/// Fails with [`ScopeError::MissingPredicate`] for the first fork, in fork
/// order, that has no predicate. Nothing is bound unless every fork evaluates.
pub fn derive_block_scope(scope: &Scope, block: BlockNumber) -> Result<BlockScope, ScopeError> {
    let mut bindings = Vec::with_capacity(Fork::COUNT + 1);
    for fork in Fork::iter() {
        let predicate = scope.predicate(fork).map_err(|err| match err {
            ScopeError::AbsentBinding { .. } => ScopeError::MissingPredicate { fork },
            other => other,
        })?;
        bindings.push((ScopeKey::Enabled(fork), ScopeValue::Bool(predicate(block))));
    }
    bindings.push((ScopeKey::BlockNumber, ScopeValue::BlockNumber(block)));
    trace!("derived block scope at block {block}");

    Ok(BlockScope(scope.with_values(bindings)))
}

impl BlockScope {
    /// Chain scope and block scope in one step.
    pub fn from_config<S: ForkSchedule>(
        schedule: Arc<S>,
        block: BlockNumber,
    ) -> Result<Self, ScopeError> {
        ChainScope::derive(schedule).at_block(block)
    }

    pub fn flags(&self) -> Result<ForkFlags, ScopeError> {
        let mut flags = ForkFlags::default();
        for fork in Fork::iter() {
            flags.set(fork, self.0.fork_flag(fork)?);
        }
        Ok(flags)
    }
}
