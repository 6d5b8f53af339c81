use std::fmt::Display;
use std::str::FromStr;

use eyre::Result;
use fork_common::{BigUint, B256};
use hex_literal::hex;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::chain::ChainConfig;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, EnumIter, Hash, Eq, PartialEq, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Ropsten,
    Rinkeby,
    Goerli,
    /// Every fork up to Petersburg active from genesis.
    Dev,
}

impl FromStr for Network {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "ropsten" => Ok(Self::Ropsten),
            "rinkeby" => Ok(Self::Rinkeby),
            "goerli" => Ok(Self::Goerli),
            "dev" => Ok(Self::Dev),
            _ => Err(eyre::eyre!("network not recognized")),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Self::Mainnet => "mainnet",
            Self::Ropsten => "ropsten",
            Self::Rinkeby => "rinkeby",
            Self::Goerli => "goerli",
            Self::Dev => "dev",
        };

        f.write_str(str)
    }
}

impl Network {
    pub fn to_chain_config(&self) -> ChainConfig {
        match self {
            Self::Mainnet => mainnet(),
            Self::Ropsten => ropsten(),
            Self::Rinkeby => rinkeby(),
            Self::Goerli => goerli(),
            Self::Dev => dev(),
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Rinkeby => 4,
            Self::Goerli => 5,
            Self::Dev => 1337,
        }
    }

    pub fn from_chain_id(id: u64) -> Result<Self> {
        match id {
            1 => Ok(Network::Mainnet),
            3 => Ok(Network::Ropsten),
            4 => Ok(Network::Rinkeby),
            5 => Ok(Network::Goerli),
            1337 => Ok(Network::Dev),
            _ => Err(eyre::eyre!("chain id not known")),
        }
    }
}

pub fn mainnet() -> ChainConfig {
    ChainConfig {
        chain_id: Some(BigUint::from(Network::Mainnet.chain_id())),
        homestead_block: Some(1_150_000),
        dao_fork_block: Some(1_920_000),
        dao_fork_support: true,
        eip150_block: Some(2_463_000),
        eip150_hash: Some(B256::new(hex!(
            "2086799aeebeae135c246c65021c82b4e15a2c451340993aacfd2751886514f0"
        ))),
        eip155_block: Some(2_675_000),
        eip158_block: Some(2_675_000),
        byzantium_block: Some(4_370_000),
        constantinople_block: Some(7_280_000),
        petersburg_block: Some(7_280_000),
        ewasm_block: None,
    }
}

pub fn ropsten() -> ChainConfig {
    ChainConfig {
        chain_id: Some(BigUint::from(Network::Ropsten.chain_id())),
        homestead_block: Some(0),
        dao_fork_support: true,
        eip150_block: Some(0),
        eip150_hash: Some(B256::new(hex!(
            "41941023680923e0fe4d74a34bdac8141f2540e3ae90623718e47d66d1ca4a2d"
        ))),
        eip155_block: Some(10),
        eip158_block: Some(10),
        byzantium_block: Some(1_700_000),
        constantinople_block: Some(4_230_000),
        petersburg_block: Some(4_939_394),
        ..Default::default()
    }
}

pub fn rinkeby() -> ChainConfig {
    ChainConfig {
        chain_id: Some(BigUint::from(Network::Rinkeby.chain_id())),
        homestead_block: Some(1),
        dao_fork_support: true,
        eip150_block: Some(2),
        eip150_hash: Some(B256::new(hex!(
            "9b095b36c15eaf13044373aef8ee0bd3a382a5abb92e402afa44b8249c3a90e9"
        ))),
        eip155_block: Some(3),
        eip158_block: Some(3),
        byzantium_block: Some(1_035_301),
        constantinople_block: Some(3_660_663),
        petersburg_block: Some(4_321_234),
        ..Default::default()
    }
}

pub fn goerli() -> ChainConfig {
    ChainConfig {
        chain_id: Some(BigUint::from(Network::Goerli.chain_id())),
        homestead_block: Some(0),
        dao_fork_support: true,
        eip150_block: Some(0),
        eip155_block: Some(0),
        eip158_block: Some(0),
        byzantium_block: Some(0),
        constantinople_block: Some(0),
        petersburg_block: Some(0),
        ..Default::default()
    }
}

pub fn dev() -> ChainConfig {
    ChainConfig {
        chain_id: Some(BigUint::from(Network::Dev.chain_id())),
        homestead_block: Some(0),
        dao_fork_block: None,
        dao_fork_support: false,
        eip150_block: Some(0),
        eip150_hash: None,
        eip155_block: Some(0),
        eip158_block: Some(0),
        byzantium_block: Some(0),
        constantinople_block: Some(0),
        petersburg_block: Some(0),
        ewasm_block: None,
    }
}
