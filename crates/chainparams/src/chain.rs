//! Network profiles: consensus rules plus everything a node needs to join
//! the network.

use skt_consensus::money::GENESIS_REWARD;
use skt_consensus::{consensus_params, hash256_to_hex, ConsensusParams, Hash256, Network};
use skt_log::{log_debug, log_error};
use skt_primitives::genesis::default_genesis_block;
use skt_primitives::Block;

use crate::base58::{Base58Prefixes, Base58Type};
use crate::checkpoints::CheckpointData;
use crate::error::ChainParamsError;
use crate::seeds::{DnsSeed, SeedSpec6};

const GENESIS_TIME: u32 = 1_499_650_125;
const GENESIS_NONCE: u32 = 69_730;
const GENESIS_BITS: u32 = 0x1e0f_fff0;
const GENESIS_VERSION: i32 = 1;

const ALERT_PUBKEY: &str = "042736aa94dcc46a596d1f42a5402261b6d9d8a72de40ace5a8856f9e5f7bab96f837f926a8ab8d1e2f8d6d7ef59732d99b55352c4fdf775bdb9690c42851609bd";
const SPORK_PUBKEY: &str = "04251df9125d968a5efeac89f08be613621ae19d3d9ca4818485d2405a994b6164d9f26c5ad3e7a19a99dc36fa7dd03f05e968b4bdd1dc39e5b25c0dc60a441506";
const MASTERNODE_PAYMENTS_PUBKEY: &str = "0483bbc11d4c6a0cb4361da2a234912a7e174e2b9ecfb7685920c24a58fa32205d73f272540032ec7f4dd9d7d865bf171268dcacaa1184675cb2ed2361eb93218f";

const MAIN_DNS_SEEDS: [DnsSeed; 1] = [DnsSeed {
    name: "www.superskynet.org",
    host: "47.52.45.101",
}];
const TEST_DNS_SEEDS: [DnsSeed; 1] = [DnsSeed {
    name: "www.superskynet.com",
    host: "47.52.45.101",
}];

const MAIN_FIXED_SEEDS: [SeedSpec6; 1] = [SeedSpec6::ipv4(47, 52, 45, 101, 19_683)];
const TEST_FIXED_SEEDS: [SeedSpec6; 1] = [SeedSpec6::ipv4(47, 52, 45, 101, 18_683)];

/// Switches read by mining, mempool and RPC code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PolicyFlags {
    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    /// Report the deprecated `testnet` field in RPC responses.
    pub testnet_to_be_deprecated_field_rpc: bool,
}

#[derive(Clone, Debug)]
pub struct ChainParams {
    pub network: Network,
    pub consensus: ConsensusParams,
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub alert_pubkey: &'static str,
    pub spork_pubkey: &'static str,
    pub masternode_payments_pubkey: &'static str,
    pub max_tip_age: i64,
    pub prune_after_height: u64,
    pub genesis: Block,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: &'static [SeedSpec6],
    pub base58_prefixes: Base58Prefixes,
    pub policy: PolicyFlags,
    pub pool_max_transactions: u32,
    pub fulfilled_request_expire_time: i64,
    pub checkpoints: CheckpointData,
}

impl ChainParams {
    pub fn network_id(&self) -> &'static str {
        self.network.as_str()
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.consensus.hash_genesis_block
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Checks the built genesis block against the expected merkle root and hash.
    pub fn verify_genesis(&self) -> Result<(), ChainParamsError> {
        check_genesis(
            self.network,
            &self.genesis,
            &self.consensus.hash_genesis_merkle_root,
            &self.consensus.hash_genesis_block,
        )
    }
}

pub fn check_genesis(
    network: Network,
    genesis: &Block,
    expected_merkle_root: &Hash256,
    expected_hash: &Hash256,
) -> Result<(), ChainParamsError> {
    if genesis.header.merkle_root != *expected_merkle_root {
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: "merkle root",
            expected: hash256_to_hex(expected_merkle_root),
            actual: hash256_to_hex(&genesis.header.merkle_root),
        });
    }
    let actual_hash = genesis.hash();
    if actual_hash != *expected_hash {
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: "hash",
            expected: hash256_to_hex(expected_hash),
            actual: hash256_to_hex(&actual_hash),
        });
    }
    Ok(())
}

/// Builds the profile for `network`.
///
/// Panics if the rebuilt genesis block does not reproduce the hard-coded
/// merkle root and hash; nothing downstream is meaningful in that case.
pub fn chain_params(network: Network) -> ChainParams {
    let params = match network {
        Network::Main => main_params(),
        Network::Test => test_params(),
        Network::Regtest => regtest_params(),
    };
    if let Err(err) = params.verify_genesis() {
        log_error!("{err}");
        panic!("{err}");
    }
    log_debug!(
        "Built {} chain parameters (genesis {})",
        network,
        hash256_to_hex(&params.genesis_hash())
    );
    params
}

fn skt_genesis() -> Block {
    default_genesis_block(
        GENESIS_TIME,
        GENESIS_NONCE,
        GENESIS_BITS,
        GENESIS_VERSION,
        GENESIS_REWARD,
    )
}

fn main_params() -> ChainParams {
    ChainParams {
        network: Network::Main,
        consensus: consensus_params(Network::Main),
        message_start: [0xb5, 0xcc, 0xcd, 0xa7],
        default_port: 19_683,
        alert_pubkey: ALERT_PUBKEY,
        spork_pubkey: SPORK_PUBKEY,
        masternode_payments_pubkey: MASTERNODE_PAYMENTS_PUBKEY,
        max_tip_age: 8 * 60 * 60,
        prune_after_height: 100_000,
        genesis: skt_genesis(),
        dns_seeds: &MAIN_DNS_SEEDS,
        fixed_seeds: &MAIN_FIXED_SEEDS,
        base58_prefixes: Base58Prefixes {
            // addresses start with '7'
            pubkey_address: 16,
            // script addresses start with 'X'
            script_address: 76,
            // private keys start with 's' or 't'
            secret_key: 126,
            ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
            // TODO: migrate to SLIP-44 coin type 31.
            ext_coin_type: [0x80, 0x00, 0x00, 0x05],
        },
        policy: PolicyFlags {
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: false,
        },
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 950,
        checkpoints: CheckpointData::from_entries(&[(
            0,
            "00000a867c51c481819d51fbb38bb48e38dd0f0312530410f1ffb9c46022242b",
        )]),
    }
}

fn test_params() -> ChainParams {
    ChainParams {
        network: Network::Test,
        consensus: consensus_params(Network::Test),
        message_start: [0xbd, 0xa3, 0xc8, 0xb1],
        default_port: 18_683,
        alert_pubkey: ALERT_PUBKEY,
        spork_pubkey: SPORK_PUBKEY,
        masternode_payments_pubkey: MASTERNODE_PAYMENTS_PUBKEY,
        max_tip_age: 0x7fff_ffff,
        prune_after_height: 1_000,
        genesis: skt_genesis(),
        dns_seeds: &TEST_DNS_SEEDS,
        fixed_seeds: &TEST_FIXED_SEEDS,
        base58_prefixes: Base58Prefixes {
            // addresses start with 'G'
            pubkey_address: 38,
            // script addresses start with '8' or '9'
            script_address: 19,
            // private keys start with 'S' or 'T'
            secret_key: 64,
            ext_public_key: [0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            ext_coin_type: [0x80, 0x00, 0x00, 0x01],
        },
        policy: PolicyFlags {
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,
        },
        pool_max_transactions: 3,
        fulfilled_request_expire_time: 5 * 60,
        checkpoints: CheckpointData::from_entries(&[(
            0,
            "00000a867c51c481819d51fbb38bb48e38dd0f0312530410f1ffb9c46022242b",
        )]),
    }
}

fn regtest_params() -> ChainParams {
    ChainParams {
        network: Network::Regtest,
        consensus: consensus_params(Network::Regtest),
        message_start: [0xe6, 0xce, 0xa3, 0xba],
        default_port: 17_683,
        // Regtest has no alert, spork or payment signers.
        alert_pubkey: "",
        spork_pubkey: "",
        masternode_payments_pubkey: "",
        max_tip_age: 60 * 60,
        prune_after_height: 1_000,
        genesis: skt_genesis(),
        dns_seeds: &[],
        fixed_seeds: &[],
        base58_prefixes: Base58Prefixes {
            // addresses start with 'R'
            pubkey_address: 61,
            // script addresses start with 'U' or 'V'
            script_address: 69,
            // private keys start with 'Q' or 'R'
            secret_key: 59,
            ext_public_key: [0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            ext_coin_type: [0x80, 0x00, 0x00, 0x01],
        },
        policy: PolicyFlags {
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
        },
        pool_max_transactions: 0,
        fulfilled_request_expire_time: 5 * 60,
        checkpoints: CheckpointData::from_entries(&[(
            0,
            "00000a867c51c481819d51fbb38bb48e38dd0f0312530410f1ffb9c46022242b",
        )]),
    }
}
