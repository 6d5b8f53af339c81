use fork_common::{BlockNumber, Fork};
use fork_config::ChainConfig;
use num_bigint::BigUint;

/// What the deriver needs from a chain configuration.
pub trait ForkSchedule: Send + Sync + 'static {
    /// `None` when the configuration leaves the chain id unset.
    fn chain_id(&self) -> Option<&BigUint>;

    fn is_fork_active(&self, fork: Fork, block: BlockNumber) -> bool;
}

impl ForkSchedule for ChainConfig {
    fn chain_id(&self) -> Option<&BigUint> {
        self.chain_id.as_ref()
    }

    fn is_fork_active(&self, fork: Fork, block: BlockNumber) -> bool {
        ChainConfig::is_fork_active(self, fork, block)
    }
}
