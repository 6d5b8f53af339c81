pub mod fixed_bytes;
pub mod fork;
pub mod serde_utils;

pub use fixed_bytes::{FixedBytes, FixedBytesError, B256};
pub use fork::Fork;
pub use num_bigint::BigUint;

/// Height of a block on the chain.
pub type BlockNumber = u64;
