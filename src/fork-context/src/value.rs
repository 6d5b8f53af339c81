use std::any::Any;
use std::fmt;
use std::sync::Arc;

use fork_common::BlockNumber;
use num_bigint::BigUint;

/// Answers whether a fork is active at a block.
pub type ActivationPredicate = Arc<dyn Fn(BlockNumber) -> bool + Send + Sync>;

/// Value bound to a [`ScopeKey`](crate::ScopeKey).
#[derive(Clone)]
pub enum ScopeValue {
    Bool(bool),
    Predicate(ActivationPredicate),
    BlockNumber(BlockNumber),
    ChainId(BigUint),
    Any(Arc<dyn Any + Send + Sync>),
}

impl ScopeValue {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(BlockNumber) -> bool + Send + Sync + 'static,
    {
        ScopeValue::Predicate(Arc::new(f))
    }

    pub fn any<T: Any + Send + Sync>(value: T) -> Self {
        ScopeValue::Any(Arc::new(value))
    }

    /// Shape of the value, as reported in type mismatches.
    pub fn kind(&self) -> &'static str {
        match self {
            ScopeValue::Bool(_) => "bool",
            ScopeValue::Predicate(_) => "predicate",
            ScopeValue::BlockNumber(_) => "block number",
            ScopeValue::ChainId(_) => "chain id",
            ScopeValue::Any(_) => "application value",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScopeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_predicate(&self) -> Option<&ActivationPredicate> {
        match self {
            ScopeValue::Predicate(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_block_number(&self) -> Option<BlockNumber> {
        match self {
            ScopeValue::BlockNumber(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_chain_id(&self) -> Option<&BigUint> {
        match self {
            ScopeValue::ChainId(id) => Some(id),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            ScopeValue::Any(v) => v.downcast_ref(),
            _ => None,
        }
    }
}

impl From<bool> for ScopeValue {
    fn from(value: bool) -> Self {
        ScopeValue::Bool(value)
    }
}

impl From<BigUint> for ScopeValue {
    fn from(value: BigUint) -> Self {
        ScopeValue::ChainId(value)
    }
}

/// Predicates and application values compare by identity.
impl PartialEq for ScopeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ScopeValue::Bool(a), ScopeValue::Bool(b)) => a == b,
            (ScopeValue::Predicate(a), ScopeValue::Predicate(b)) => Arc::ptr_eq(a, b),
            (ScopeValue::BlockNumber(a), ScopeValue::BlockNumber(b)) => a == b,
            (ScopeValue::ChainId(a), ScopeValue::ChainId(b)) => a == b,
            (ScopeValue::Any(a), ScopeValue::Any(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ScopeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ScopeValue::Predicate(_) => f.write_str("Predicate(..)"),
            ScopeValue::BlockNumber(n) => f.debug_tuple("BlockNumber").field(n).finish(),
            ScopeValue::ChainId(id) => f.debug_tuple("ChainId").field(id).finish(),
            ScopeValue::Any(_) => f.write_str("Any(..)"),
        }
    }
}
