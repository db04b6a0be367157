//! Consensus parameter definitions.

use crate::deployments::{Deployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};

pub type Hash256 = [u8; 32];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

pub const ALL_NETWORKS: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

impl Network {
    /// Network identifier as used on the command line and in `getblockchaininfo`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Regtest => "regtest",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "main" => Some(Self::Main),
            "test" => Some(Self::Test),
            "regtest" => Some(Self::Regtest),
            _ => None,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MasternodeParams {
    pub payments_start_block: i32,
    pub payments_increase_block: Option<i32>,
    pub payments_increase_period: Option<i32>,
    pub instant_send_keep_lock: i32,
    pub minimum_confirmations: i32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceParams {
    pub budget_payments_start_block: i32,
    pub budget_payments_cycle_blocks: i32,
    pub budget_payments_window_blocks: i32,
    /// Seconds a proposal must exist before it can be funded.
    pub budget_proposal_establishing_time: i64,
    pub superblock_start_block: i32,
    pub superblock_cycle: i32,
    pub min_quorum: i32,
    pub filter_elements: i32,
}

#[derive(Clone, Debug)]
pub struct ConsensusParams {
    pub network: Network,
    pub hash_genesis_block: Hash256,
    pub hash_genesis_merkle_root: Hash256,
    pub subsidy_halving_interval: Option<i32>,
    pub masternode: MasternodeParams,
    pub governance: GovernanceParams,
    pub majority_enforce_block_upgrade: i32,
    pub majority_reject_block_outdated: i32,
    pub majority_window: i32,
    pub bip34_height: Option<i32>,
    pub bip34_hash: Hash256,
    pub pow_limit: Hash256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    /// Blocks within a confirmation window that must signal for lock-in.
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: [Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
}

impl ConsensusParams {
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        &self.deployments[pos.as_usize()]
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HexError {
    InvalidLength,
    InvalidHex,
}

impl std::fmt::Display for HexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexError::InvalidLength => write!(f, "hex string has invalid length"),
            HexError::InvalidHex => write!(f, "invalid hex string"),
        }
    }
}

impl std::error::Error for HexError {}

/// Parses a big-endian display hex string (optionally `0x`-prefixed, possibly
/// short) into the little-endian byte order used internally.
pub fn hash256_from_hex(input: &str) -> Result<Hash256, HexError> {
    let mut hex = input.trim();
    if let Some(stripped) = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")) {
        hex = stripped;
    }

    if hex.is_empty() || hex.len() > 64 {
        return Err(HexError::InvalidLength);
    }

    let padded = format!("{hex:0>64}");
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|_| HexError::InvalidHex)?;
    bytes.reverse();

    Ok(bytes)
}

pub fn hash256_to_hex(hash: &Hash256) -> String {
    let mut display = *hash;
    display.reverse();
    hex::encode(display)
}

const GENESIS_HASH_HEX: &str = "00000a867c51c481819d51fbb38bb48e38dd0f0312530410f1ffb9c46022242b";
const GENESIS_MERKLE_ROOT_HEX: &str =
    "035340302126648f241f089a37aab7384014eef9f5fd0dffc1c4dcacae97cb39";

pub fn consensus_params(network: Network) -> ConsensusParams {
    match network {
        Network::Main => main_consensus_params(),
        Network::Test => test_consensus_params(),
        Network::Regtest => regtest_consensus_params(),
    }
}

fn main_consensus_params() -> ConsensusParams {
    ConsensusParams {
        network: Network::Main,
        hash_genesis_block: hash256_from_hex(GENESIS_HASH_HEX).expect("main genesis hash"),
        hash_genesis_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT_HEX)
            .expect("main genesis merkle root"),
        subsidy_halving_interval: None,
        masternode: MasternodeParams {
            payments_start_block: 322,
            payments_increase_block: None,
            payments_increase_period: None,
            instant_send_keep_lock: 94,
            minimum_confirmations: 20,
        },
        governance: GovernanceParams {
            budget_payments_start_block: 65_123,
            budget_payments_cycle_blocks: 64_800,
            budget_payments_window_blocks: 390,
            budget_proposal_establishing_time: 86_400,
            superblock_start_block: 69_023,
            superblock_cycle: 64_800,
            min_quorum: 10,
            filter_elements: 20_000,
        },
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 3_900,
        bip34_height: None,
        bip34_hash: [0u8; 32],
        pow_limit: hash256_from_hex(
            "00000fffff000000000000000000000000000000000000000000000000000000",
        )
        .expect("main pow limit"),
        pow_target_timespan: 120,
        pow_target_spacing: 40,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 2,
        miner_confirmation_window: 3,
        deployments: [
            // January 1, 2008 .. December 31, 2008
            Deployment {
                bit: 28,
                start_time: 1_199_145_601,
                timeout: 1_230_767_999,
            },
            // Feb 5th, 2017 .. Feb 5th, 2018
            Deployment {
                bit: 0,
                start_time: 1_486_252_800,
                timeout: 1_517_788_800,
            },
        ],
    }
}

fn test_consensus_params() -> ConsensusParams {
    ConsensusParams {
        network: Network::Test,
        hash_genesis_block: hash256_from_hex(GENESIS_HASH_HEX).expect("test genesis hash"),
        hash_genesis_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT_HEX)
            .expect("test genesis merkle root"),
        subsidy_halving_interval: None,
        masternode: MasternodeParams {
            payments_start_block: 121,
            payments_increase_block: None,
            payments_increase_period: None,
            instant_send_keep_lock: 24,
            minimum_confirmations: 1,
        },
        governance: GovernanceParams {
            budget_payments_start_block: 2_282,
            budget_payments_cycle_blocks: 90,
            budget_payments_window_blocks: 39,
            budget_proposal_establishing_time: 720,
            superblock_start_block: 2_432,
            superblock_cycle: 90,
            min_quorum: 1,
            filter_elements: 500,
        },
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 390,
        bip34_height: None,
        bip34_hash: [0u8; 32],
        pow_limit: hash256_from_hex(
            "00000fffff000000000000000000000000000000000000000000000000000000",
        )
        .expect("test pow limit"),
        pow_target_timespan: 60,
        pow_target_spacing: 40,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 8,
        miner_confirmation_window: 11,
        deployments: [
            Deployment {
                bit: 28,
                start_time: 1_199_145_601,
                timeout: 1_230_767_999,
            },
            // March 1st, 2016 .. May 1st, 2017
            Deployment {
                bit: 0,
                start_time: 1_456_790_400,
                timeout: 1_493_596_800,
            },
        ],
    }
}

fn regtest_consensus_params() -> ConsensusParams {
    ConsensusParams {
        network: Network::Regtest,
        hash_genesis_block: hash256_from_hex(GENESIS_HASH_HEX).expect("regtest genesis hash"),
        hash_genesis_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT_HEX)
            .expect("regtest genesis merkle root"),
        subsidy_halving_interval: None,
        masternode: MasternodeParams {
            payments_start_block: 121,
            payments_increase_block: None,
            payments_increase_period: None,
            instant_send_keep_lock: 6,
            minimum_confirmations: 1,
        },
        governance: GovernanceParams {
            budget_payments_start_block: 212,
            budget_payments_cycle_blocks: 90,
            budget_payments_window_blocks: 39,
            budget_proposal_establishing_time: 720,
            superblock_start_block: 318,
            superblock_cycle: 10,
            min_quorum: 1,
            filter_elements: 100,
        },
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1_000,
        // BIP34 has not necessarily activated on regtest.
        bip34_height: None,
        bip34_hash: [0u8; 32],
        pow_limit: hash256_from_hex(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        )
        .expect("regtest pow limit"),
        pow_target_timespan: 24 * 60 * 60,
        pow_target_spacing: 40,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        deployments: [
            Deployment {
                bit: 28,
                start_time: 0,
                timeout: Deployment::NO_TIMEOUT,
            },
            Deployment {
                bit: 0,
                start_time: 0,
                timeout: Deployment::NO_TIMEOUT,
            },
        ],
    }
}
