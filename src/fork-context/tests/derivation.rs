use std::sync::Arc;

use fork_common::{BigUint, BlockNumber, Fork};
use fork_config::{ChainConfig, Network};
use fork_context::{
    derive_block_scope, BlockScope, ChainScope, ForkFlags, Scope, ScopeError, ScopeKey, ScopeValue,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

const MAX_HEIGHT: BlockNumber = 12_000_000;

fn activation() -> impl Strategy<Value = Option<BlockNumber>> {
    proptest::option::of(0..MAX_HEIGHT)
}

prop_compose! {
    fn chain_config()(
        chain_id in proptest::option::of(any::<u64>()),
        homestead_block in activation(),
        eip150_block in activation(),
        eip155_block in activation(),
        eip158_block in activation(),
        byzantium_block in activation(),
        constantinople_block in activation(),
        petersburg_block in activation(),
        ewasm_block in activation(),
    ) -> ChainConfig {
        ChainConfig {
            chain_id: chain_id.map(BigUint::from),
            homestead_block,
            eip150_block,
            eip155_block,
            eip158_block,
            byzantium_block,
            constantinople_block,
            petersburg_block,
            ewasm_block,
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn flags_match_direct_evaluation(config in chain_config(), block in 0..MAX_HEIGHT) {
        let config = Arc::new(config);
        let scope = ChainScope::derive(config.clone()).at_block(block).unwrap();

        for fork in Fork::iter() {
            prop_assert_eq!(scope.fork_flag(fork), Ok(config.is_fork_active(fork, block)));
        }
        prop_assert_eq!(scope.flags().unwrap(), ForkFlags::evaluate(config.as_ref(), block));
        prop_assert_eq!(scope.block_number(), Ok(block));
    }

    #[test]
    fn chain_id_is_never_absent(config in chain_config()) {
        let expected = config.chain_id.clone().unwrap_or_default();
        let chain = ChainScope::derive(Arc::new(config));
        prop_assert_eq!(chain.chain_id(), Ok(&expected));
    }

    #[test]
    fn layers_are_independent(
        config in chain_config(),
        a in 0..MAX_HEIGHT,
        b in 0..MAX_HEIGHT,
    ) {
        let config = Arc::new(config);
        let chain = ChainScope::derive(config.clone());
        let first = chain.at_block(a).unwrap();
        let second = chain.at_block(b).unwrap();

        prop_assert_eq!(first.value(&ScopeKey::ChainId), second.value(&ScopeKey::ChainId));
        for fork in Fork::iter() {
            let key = ScopeKey::Predicate(fork);
            prop_assert_eq!(first.value(&key), second.value(&key));
            prop_assert_eq!(first.fork_flag(fork), Ok(config.is_fork_active(fork, a)));
            prop_assert_eq!(second.fork_flag(fork), Ok(config.is_fork_active(fork, b)));
        }
        prop_assert_eq!(first.block_number(), Ok(a));
        prop_assert_eq!(second.block_number(), Ok(b));
    }

    #[test]
    fn with_value_shadows_only_its_key(
        block in any::<u64>(),
        first in any::<bool>(),
        second in any::<bool>(),
    ) {
        let base = Scope::root()
            .with_value(ScopeKey::BlockNumber, ScopeValue::BlockNumber(block));
        let key = ScopeKey::Enabled(Fork::Constantinople);

        let once = base.with_value(key, first);
        let twice = once.with_value(key, second);

        prop_assert_eq!(once.value(&key), Some(&ScopeValue::Bool(first)));
        prop_assert_eq!(twice.value(&key), Some(&ScopeValue::Bool(second)));
        prop_assert_eq!(
            twice.value(&ScopeKey::BlockNumber),
            base.value(&ScopeKey::BlockNumber)
        );
        prop_assert_eq!(base.value(&key), None);
    }
}

#[test]
fn mainnet_block_three_million() {
    let block = BlockScope::from_config(Arc::new(Network::Mainnet.to_chain_config()), 3_000_000)
        .unwrap();

    let active: Vec<_> = block.flags().unwrap().active().collect();
    assert_eq!(
        active,
        vec![Fork::Homestead, Fork::Eip150, Fork::Eip155, Fork::Eip158]
    );
    assert_eq!(block.chain_id(), Ok(&BigUint::from(1u32)));
}

#[test]
fn chain_scope_flag_query_is_absent_not_false() {
    let chain = ChainScope::derive(Arc::new(Network::Dev.to_chain_config()));
    for fork in Fork::iter() {
        assert_eq!(
            chain.fork_flag(fork),
            Err(ScopeError::AbsentBinding {
                key: ScopeKey::Enabled(fork)
            })
        );
    }
}

#[test]
fn block_scope_over_unscoped_carrier_fails_before_binding() {
    let root = Scope::root().with_value(ScopeKey::App("request"), ScopeValue::any("r-1"));
    let err = derive_block_scope(&root, 10).unwrap_err();
    assert_eq!(
        err,
        ScopeError::MissingPredicate {
            fork: Fork::Homestead
        }
    );
    assert_eq!(root.depth(), 1);
}

#[test]
fn flags_serialize_in_fork_order() {
    let block = BlockScope::from_config(Arc::new(Network::Goerli.to_chain_config()), 0).unwrap();
    let json = serde_json::to_string(&block.flags().unwrap()).unwrap();
    assert_eq!(json, "[true,true,true,true,true,true,true,false]");
}
