use std::collections::HashSet;

use skt_chainparams::base58::ALL_BASE58_TYPES;
use skt_chainparams::{chain_params, Base58Type, ParameterRegistry};
use skt_consensus::{hash256_to_hex, DeploymentPos, Network, ALL_DEPLOYMENTS, ALL_NETWORKS};

const GENESIS_HASH: &str = "00000a867c51c481819d51fbb38bb48e38dd0f0312530410f1ffb9c46022242b";
const GENESIS_MERKLE: &str = "035340302126648f241f089a37aab7384014eef9f5fd0dffc1c4dcacae97cb39";

#[test]
fn every_profile_reproduces_its_genesis() {
    for network in ALL_NETWORKS {
        let params = chain_params(network);
        assert_eq!(hash256_to_hex(&params.genesis.hash()), GENESIS_HASH, "{network}");
        assert_eq!(
            hash256_to_hex(&params.genesis.header.merkle_root),
            GENESIS_MERKLE,
            "{network}"
        );
        assert_eq!(params.genesis.hash(), params.consensus.hash_genesis_block);
        assert_eq!(
            params.genesis.header.merkle_root,
            params.consensus.hash_genesis_merkle_root
        );
        assert_eq!(params.genesis.header.time, 1_499_650_125);
        assert_eq!(params.genesis.header.nonce, 69_730);
        assert_eq!(params.genesis.header.bits, 0x1e0f_fff0);
        assert_eq!(params.genesis.header.version, 1);
    }
}

#[test]
fn message_start_and_ports_are_distinct() {
    let profiles: Vec<_> = ALL_NETWORKS.iter().map(|n| chain_params(*n)).collect();

    let magics: HashSet<[u8; 4]> = profiles.iter().map(|p| p.message_start).collect();
    assert_eq!(magics.len(), profiles.len());
    let ports: HashSet<u16> = profiles.iter().map(|p| p.default_port).collect();
    assert_eq!(ports.len(), profiles.len());

    assert_eq!(hex::encode(profiles[0].message_start), "b5cccda7");
    assert_eq!(hex::encode(profiles[1].message_start), "bda3c8b1");
    assert_eq!(hex::encode(profiles[2].message_start), "e6cea3ba");
}

#[test]
fn genesis_is_the_first_checkpoint() {
    for network in ALL_NETWORKS {
        let params = chain_params(network);
        let entries = params.checkpoints.entries();
        assert_eq!(entries[0].height, 0, "{network}");
        assert_eq!(entries[0].hash, params.consensus.hash_genesis_block, "{network}");
        assert_eq!(params.checkpoints.hash_at(0), Some(&params.genesis_hash()));
        assert!(params.checkpoints.is_strictly_increasing(), "{network}");
    }
}

#[test]
fn main_and_test_prefixes_do_not_collide() {
    let main = chain_params(Network::Main);
    let test = chain_params(Network::Test);
    for kind in [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ] {
        assert_ne!(main.base58_prefix(kind), test.base58_prefix(kind), "{kind:?}");
    }
    for kind in ALL_BASE58_TYPES {
        let expected_len = match kind {
            Base58Type::PubkeyAddress | Base58Type::ScriptAddress | Base58Type::SecretKey => 1,
            _ => 4,
        };
        assert_eq!(main.base58_prefix(kind).len(), expected_len, "{kind:?}");
    }
}

#[test]
fn deployment_bits_are_unique_per_network() {
    for network in ALL_NETWORKS {
        let params = chain_params(network);
        let bits: HashSet<u8> = ALL_DEPLOYMENTS
            .iter()
            .map(|pos| params.consensus.deployment(*pos).bit)
            .collect();
        assert_eq!(bits.len(), ALL_DEPLOYMENTS.len(), "{network}");
        for pos in ALL_DEPLOYMENTS {
            assert!(params.consensus.deployment(pos).bit < 29, "{network} {pos:?}");
        }
    }
}

#[test]
fn network_specific_consensus_values() {
    let registry = ParameterRegistry::new();
    let main = registry.profile(Network::Main);
    let test = registry.profile(Network::Test);
    let regtest = registry.profile(Network::Regtest);

    assert_eq!(main.consensus.difficulty_adjustment_interval(), 3);
    assert_eq!(test.consensus.difficulty_adjustment_interval(), 1);
    assert!(!main.consensus.pow_allow_min_difficulty_blocks);
    assert!(test.consensus.pow_allow_min_difficulty_blocks);
    assert!(regtest.consensus.pow_no_retargeting);
    assert_eq!(main.consensus.subsidy_halving_interval, None);
    assert_eq!(regtest.consensus.subsidy_halving_interval, None);
    assert_eq!(regtest.consensus.deployment(DeploymentPos::Csv).start_time, 0);
    assert_eq!(main.consensus.rule_change_activation_threshold, 2);
    assert_eq!(regtest.consensus.miner_confirmation_window, 144);
}
