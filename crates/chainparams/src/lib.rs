//! Per-network chain parameters and the registry that selects the active one.

pub mod base58;
pub mod chain;
pub mod checkpoints;
pub mod error;
pub mod registry;
pub mod seeds;

pub use base58::{Base58Prefixes, Base58Type};
pub use chain::{chain_params, ChainParams, PolicyFlags};
pub use checkpoints::{Checkpoint, CheckpointData};
pub use error::ChainParamsError;
pub use registry::ParameterRegistry;
pub use seeds::{DnsSeed, SeedSpec6};
pub use skt_consensus::Network;
