use std::fmt;

use fork_common::Fork;

/// Name of a binding in a [`Scope`](crate::Scope).
///
/// Every fork owns exactly two keys: the evaluated flag and the unevaluated
/// activation predicate. Both carry the same [`Fork`], so the pairing cannot
/// drift.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ScopeKey {
    /// Whether the fork is active at the scope's block.
    Enabled(Fork),
    /// The activation predicate of the fork.
    Predicate(Fork),
    BlockNumber,
    ChainId,
    /// Ad hoc value attached by application code.
    App(&'static str),
}

impl ScopeKey {
    /// The evaluated and predicate keys of `fork`.
    pub const fn pair(fork: Fork) -> (ScopeKey, ScopeKey) {
        (ScopeKey::Enabled(fork), ScopeKey::Predicate(fork))
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKey::Enabled(fork) => write!(f, "is_{fork}_enabled"),
            ScopeKey::Predicate(fork) => write!(f, "is_{fork}_predicate"),
            ScopeKey::BlockNumber => f.write_str("block_number"),
            ScopeKey::ChainId => f.write_str("chain_id"),
            ScopeKey::App(name) => write!(f, "app:{name}"),
        }
    }
}
