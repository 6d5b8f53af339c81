use fork_common::BlockNumber;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{later} at block {later_block} activates before {earlier} at block {earlier_block}")]
    MisorderedFork {
        earlier: &'static str,
        earlier_block: BlockNumber,
        later: &'static str,
        later_block: BlockNumber,
    },
}
