use fork_common::serde_utils::opt_biguint;
use fork_common::{BigUint, BlockNumber, Fork, B256};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Activation heights of the protocol upgrades of one chain.
///
/// Every `*_block` field is the first block at which the fork applies; `None`
/// means the fork never activates.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    /// `None` is kept distinct from an explicit zero.
    #[serde(with = "opt_biguint")]
    pub chain_id: Option<BigUint>,
    pub homestead_block: Option<BlockNumber>,
    pub dao_fork_block: Option<BlockNumber>,
    pub dao_fork_support: bool,
    pub eip150_block: Option<BlockNumber>,
    /// Hash of the EIP150 fork block, for clients that pin it.
    pub eip150_hash: Option<B256>,
    pub eip155_block: Option<BlockNumber>,
    pub eip158_block: Option<BlockNumber>,
    pub byzantium_block: Option<BlockNumber>,
    pub constantinople_block: Option<BlockNumber>,
    pub petersburg_block: Option<BlockNumber>,
    pub ewasm_block: Option<BlockNumber>,
}

#[inline]
fn is_forked(fork_block: Option<BlockNumber>, head: BlockNumber) -> bool {
    matches!(fork_block, Some(block) if block <= head)
}

impl ChainConfig {
    pub fn is_homestead(&self, num: BlockNumber) -> bool {
        is_forked(self.homestead_block, num)
    }

    pub fn is_dao_fork(&self, num: BlockNumber) -> bool {
        is_forked(self.dao_fork_block, num)
    }

    pub fn is_eip150(&self, num: BlockNumber) -> bool {
        is_forked(self.eip150_block, num)
    }

    pub fn is_eip155(&self, num: BlockNumber) -> bool {
        is_forked(self.eip155_block, num)
    }

    pub fn is_eip158(&self, num: BlockNumber) -> bool {
        is_forked(self.eip158_block, num)
    }

    pub fn is_byzantium(&self, num: BlockNumber) -> bool {
        is_forked(self.byzantium_block, num)
    }

    pub fn is_constantinople(&self, num: BlockNumber) -> bool {
        is_forked(self.constantinople_block, num)
    }

    /// Petersburg is active from its own block, or together with
    /// Constantinople when no Petersburg block is configured.
    pub fn is_petersburg(&self, num: BlockNumber) -> bool {
        is_forked(self.petersburg_block, num)
            || (self.petersburg_block.is_none() && self.is_constantinople(num))
    }

    pub fn is_ewasm(&self, num: BlockNumber) -> bool {
        is_forked(self.ewasm_block, num)
    }

    pub fn is_fork_active(&self, fork: Fork, num: BlockNumber) -> bool {
        match fork {
            Fork::Homestead => self.is_homestead(num),
            Fork::Eip150 => self.is_eip150(num),
            Fork::Eip155 => self.is_eip155(num),
            Fork::Eip158 => self.is_eip158(num),
            Fork::Byzantium => self.is_byzantium(num),
            Fork::Constantinople => self.is_constantinople(num),
            Fork::Petersburg => self.is_petersburg(num),
            Fork::Ewasm => self.is_ewasm(num),
        }
    }

    /// Checks that configured forks activate in order. Unset forks are skipped.
    pub fn check_ordering(&self) -> Result<(), ConfigError> {
        let forks = [
            ("homestead", self.homestead_block),
            ("dao", self.dao_fork_block),
            ("eip150", self.eip150_block),
            ("eip155", self.eip155_block),
            ("eip158", self.eip158_block),
            ("byzantium", self.byzantium_block),
            ("constantinople", self.constantinople_block),
            ("petersburg", self.petersburg_block),
        ];

        let mut last: Option<(&'static str, BlockNumber)> = None;
        for (name, block) in forks {
            let Some(block) = block else { continue };
            if let Some((last_name, last_block)) = last {
                if block < last_block {
                    return Err(ConfigError::MisorderedFork {
                        earlier: last_name,
                        earlier_block: last_block,
                        later: name,
                        later_block: block,
                    });
                }
            }
            last = Some((name, block));
        }
        Ok(())
    }
}
