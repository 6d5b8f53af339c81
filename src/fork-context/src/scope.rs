use std::collections::BTreeMap;
use std::sync::Arc;

use fork_common::{BlockNumber, Fork};
use num_bigint::BigUint;

use crate::cancel::Boundary;
use crate::errors::ScopeError;
use crate::key::ScopeKey;
use crate::value::{ActivationPredicate, ScopeValue};

/// Immutable, layered key/value carrier.
///
/// Each layer owns its bindings and a link to its parent. Enriching a scope
/// builds a new layer on top and leaves the original untouched, so clones are
/// cheap and a scope can be shared freely between threads.
#[derive(Clone, Default)]
pub struct Scope {
    layer: Option<Arc<Layer>>,
}

pub(crate) struct Layer {
    bindings: BTreeMap<ScopeKey, ScopeValue>,
    pub(crate) boundary: Option<Boundary>,
    parent: Scope,
}

impl Scope {
    /// The empty scope every chain of layers starts from.
    pub fn root() -> Self {
        Self::default()
    }

    /// New scope binding `key` to `value` and delegating everything else to `self`.
    pub fn with_value(&self, key: ScopeKey, value: impl Into<ScopeValue>) -> Scope {
        self.with_values([(key, value.into())])
    }

    /// New scope binding all of `bindings` in a single layer. Later entries
    /// win over earlier ones with the same key.
    pub fn with_values(
        &self,
        bindings: impl IntoIterator<Item = (ScopeKey, ScopeValue)>,
    ) -> Scope {
        self.push(bindings.into_iter().collect(), None)
    }

    pub(crate) fn push(
        &self,
        bindings: BTreeMap<ScopeKey, ScopeValue>,
        boundary: Option<Boundary>,
    ) -> Scope {
        Scope {
            layer: Some(Arc::new(Layer {
                bindings,
                boundary,
                parent: self.clone(),
            })),
        }
    }

    pub(crate) fn layers(&self) -> impl Iterator<Item = &Layer> {
        let mut next = self.layer.as_deref();
        std::iter::from_fn(move || {
            let layer = next?;
            next = layer.parent.layer.as_deref();
            Some(layer)
        })
    }

    /// Number of layers above the root.
    pub fn depth(&self) -> usize {
        self.layers().count()
    }

    /// Innermost binding of `key`, if any layer has one.
    pub fn value(&self, key: &ScopeKey) -> Option<&ScopeValue> {
        self.layers().find_map(|layer| layer.bindings.get(key))
    }

    fn lookup<'a, T>(
        &'a self,
        key: ScopeKey,
        expected: &'static str,
        extract: impl FnOnce(&'a ScopeValue) -> Option<T>,
    ) -> Result<T, ScopeError> {
        let value = self.value(&key).ok_or(ScopeError::AbsentBinding { key })?;
        extract(value).ok_or_else(|| ScopeError::TypeMismatch {
            key,
            expected,
            found: value.kind(),
        })
    }

    /// Evaluated activation flag of `fork`. Only a block scope carries one.
    pub fn fork_flag(&self, fork: Fork) -> Result<bool, ScopeError> {
        self.lookup(ScopeKey::Enabled(fork), "bool", ScopeValue::as_bool)
    }

    pub fn block_number(&self) -> Result<BlockNumber, ScopeError> {
        self.lookup(
            ScopeKey::BlockNumber,
            "block number",
            ScopeValue::as_block_number,
        )
    }

    pub fn chain_id(&self) -> Result<&BigUint, ScopeError> {
        self.lookup(ScopeKey::ChainId, "chain id", ScopeValue::as_chain_id)
    }

    pub fn predicate(&self, fork: Fork) -> Result<&ActivationPredicate, ScopeError> {
        self.lookup(
            ScopeKey::Predicate(fork),
            "predicate",
            ScopeValue::as_predicate,
        )
    }

    /// Application value stored under `App(name)`.
    pub fn app_value<T: std::any::Any>(&self, name: &'static str) -> Result<&T, ScopeError> {
        self.lookup(
            ScopeKey::App(name),
            std::any::type_name::<T>(),
            ScopeValue::downcast_ref::<T>,
        )
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for layer in self.layers() {
            list.entry(&layer.bindings);
        }
        list.finish()
    }
}
