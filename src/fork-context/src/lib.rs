//! Fork activation flags carried through immutable, layered scopes.
//!
//! A [`ChainScope`] binds the chain id and one activation predicate per fork.
//! Extending it with a block number gives a [`BlockScope`], which also binds
//! the block number and every predicate evaluated at that block:
//!
//! ```
//! use std::sync::Arc;
//!
//! use fork_common::Fork;
//! use fork_config::Network;
//! use fork_context::ChainScope;
//!
//! let chain = ChainScope::derive(Arc::new(Network::Mainnet.to_chain_config()));
//! let block = chain.at_block(3_000_000).unwrap();
//!
//! assert!(block.fork_flag(Fork::Eip155).unwrap());
//! assert!(!block.fork_flag(Fork::Byzantium).unwrap());
//! assert_eq!(block.block_number().unwrap(), 3_000_000);
//! ```

mod cancel;
mod derive;
mod errors;
mod flags;
mod key;
mod schedule;
mod scope;
mod value;

pub use cancel::CancelHandle;
pub use derive::{derive_block_scope, BlockScope, ChainScope};
pub use errors::{Interrupted, ScopeError};
pub use flags::ForkFlags;
pub use key::ScopeKey;
pub use schedule::ForkSchedule;
pub use scope::Scope;
pub use value::{ActivationPredicate, ScopeValue};
