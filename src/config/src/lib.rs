use std::path::Path;

use eyre::Result;
use figment::providers::{Data, Env, Format, Serialized, Toml};
use figment::Figment;
use log::debug;

pub mod chain;
pub mod errors;
pub mod networks;

pub use chain::ChainConfig;
pub use errors::ConfigError;
pub use networks::Network;

/// Prefix of environment variables overriding loaded values, e.g.
/// `FORKCTX_EIP155_BLOCK=10`.
pub const ENV_PREFIX: &str = "FORKCTX_";

impl ChainConfig {
    /// Loads the configuration of `network` from a TOML file.
    ///
    /// The network preset provides the defaults. The file may override them in a
    /// `[default]` table or in a table named after the network, and environment
    /// variables with [`ENV_PREFIX`] override both.
    pub fn from_file(path: &Path, network: Network) -> Result<Self> {
        Self::extract(Toml::file(path), network)
    }

    pub fn from_toml_str(contents: &str, network: Network) -> Result<Self> {
        Self::extract(Toml::string(contents), network)
    }

    fn extract(source: Data<Toml>, network: Network) -> Result<Self> {
        let config: ChainConfig = Figment::from(Serialized::defaults(network.to_chain_config()))
            .merge(source.nested())
            .merge(Env::prefixed(ENV_PREFIX).global())
            .select(network.to_string())
            .extract()?;

        config.check_ordering()?;
        debug!(
            "loaded {} chain config, chain id {:?}",
            network, config.chain_id
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use fork_common::BigUint;

    use super::*;

    // Loading reads the process environment, so every test runs jailed.

    #[test]
    fn test_preset_without_overrides() {
        Jail::expect_with(|_| {
            let config =
                ChainConfig::from_toml_str("", Network::Mainnet).map_err(|e| e.to_string())?;
            assert_eq!(config, networks::mainnet());
            Ok(())
        });
    }

    #[test]
    fn test_network_table_overrides_default_table() {
        Jail::expect_with(|_| {
            let toml = r#"
                [default]
                ewasm_block = 100

                [rinkeby]
                ewasm_block = 200
                chain_id = "0x2a"
            "#;
            let rinkeby =
                ChainConfig::from_toml_str(toml, Network::Rinkeby).map_err(|e| e.to_string())?;
            assert_eq!(rinkeby.ewasm_block, Some(200));
            assert_eq!(rinkeby.chain_id, Some(BigUint::from(42u32)));
            assert_eq!(rinkeby.petersburg_block, Some(4_321_234));

            let goerli =
                ChainConfig::from_toml_str(toml, Network::Goerli).map_err(|e| e.to_string())?;
            assert_eq!(goerli.ewasm_block, Some(100));
            assert_eq!(goerli.chain_id, Some(BigUint::from(5u32)));
            Ok(())
        });
    }

    #[test]
    fn test_misordered_file_is_rejected() {
        Jail::expect_with(|_| {
            let toml = r#"
                [mainnet]
                byzantium_block = 1
            "#;
            let err = ChainConfig::from_toml_str(toml, Network::Mainnet).unwrap_err();
            assert!(err.downcast_ref::<ConfigError>().is_some());
            Ok(())
        });
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        Jail::expect_with(|_| {
            let toml = r#"
                [default]
                london_block = 1
            "#;
            assert!(ChainConfig::from_toml_str(toml, Network::Dev).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "chain.toml",
                r#"
                    [dev]
                    ewasm_block = 5
                "#,
            )?;
            jail.set_env("FORKCTX_EWASM_BLOCK", "7");
            jail.set_env("FORKCTX_CHAIN_ID", "99");

            let config = ChainConfig::from_file(Path::new("chain.toml"), Network::Dev)
                .map_err(|e| e.to_string())?;
            assert_eq!(config.ewasm_block, Some(7));
            assert_eq!(config.chain_id, Some(BigUint::from(99u32)));
            assert_eq!(config.homestead_block, Some(0));
            Ok(())
        });
    }
}
