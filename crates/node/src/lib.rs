//! Entry point for the `sktd` binary.

pub mod config;

use serde::Serialize;
use skt_chainparams::{Base58Type, ChainParams, ChainParamsError, ParameterRegistry};
use skt_consensus::hash256_to_hex;
use skt_log::log_info;

pub use config::{usage, CliAction, ConfigError, NodeConfig};

#[derive(Debug)]
pub enum NodeError {
    Config(ConfigError),
    ChainParams(ChainParamsError),
    Json(serde_json::Error),
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::Config(err) => write!(f, "{err}\n{}", usage()),
            NodeError::ChainParams(err) => write!(f, "Error: {err}"),
            NodeError::Json(err) => write!(f, "failed to encode summary: {err}"),
        }
    }
}

impl std::error::Error for NodeError {}

impl From<ConfigError> for NodeError {
    fn from(err: ConfigError) -> Self {
        NodeError::Config(err)
    }
}

impl From<ChainParamsError> for NodeError {
    fn from(err: ChainParamsError) -> Self {
        NodeError::ChainParams(err)
    }
}

impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::Json(err)
    }
}

/// What `sktd` reports about the network it selected.
#[derive(Debug, Serialize)]
pub struct ChainSummary {
    pub network: &'static str,
    pub genesis_hash: String,
    pub genesis_merkle_root: String,
    pub message_start: String,
    pub default_port: u16,
    pub dns_seeds: Vec<&'static str>,
    pub pubkey_address_prefix: u8,
    pub script_address_prefix: u8,
    pub coin_type: u32,
    pub pow_target_spacing: i64,
    pub difficulty_adjustment_interval: i64,
    pub checkpoints: usize,
}

impl ChainSummary {
    pub fn from_params(params: &ChainParams) -> Self {
        let message_start = params
            .message_start
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Self {
            network: params.network_id(),
            genesis_hash: hash256_to_hex(&params.genesis_hash()),
            genesis_merkle_root: hash256_to_hex(&params.consensus.hash_genesis_merkle_root),
            message_start,
            default_port: params.default_port,
            dns_seeds: params.dns_seeds.iter().map(|seed| seed.name).collect(),
            pubkey_address_prefix: params.base58_prefix(Base58Type::PubkeyAddress)[0],
            script_address_prefix: params.base58_prefix(Base58Type::ScriptAddress)[0],
            coin_type: params.base58_prefixes.coin_type_index(),
            pow_target_spacing: params.consensus.pow_target_spacing,
            difficulty_adjustment_interval: params.consensus.difficulty_adjustment_interval(),
            checkpoints: params.checkpoints.entries().len(),
        }
    }
}

/// Activates `config.network` on `registry` and renders its summary.
pub fn select_network(registry: &ParameterRegistry, config: &NodeConfig) -> Result<String, NodeError> {
    let params = registry.activate(&config.network)?;
    log_info!(
        "Selected {} (port {}, magic {:02x?})",
        params.network_id(),
        params.default_port,
        params.message_start
    );
    Ok(serde_json::to_string_pretty(&ChainSummary::from_params(params))?)
}

pub fn run_entry<I>(args: I) -> Result<(), NodeError>
where
    I: IntoIterator<Item = String>,
{
    let config = match NodeConfig::parse(args)? {
        CliAction::PrintHelp => {
            println!("{}", usage());
            return Ok(());
        }
        CliAction::PrintVersion => {
            println!("sktd {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        CliAction::Run(config) => config,
    };

    skt_log::init(config.log);
    let registry = ParameterRegistry::new();
    let summary = select_network(&registry, &config)?;
    println!("{summary}");
    Ok(())
}
