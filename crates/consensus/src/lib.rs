//! Consensus rule sets for the SKT networks.

pub mod deployments;
pub mod money;
pub mod params;

pub use deployments::{Deployment, DeploymentPos, ALL_DEPLOYMENTS, MAX_VERSION_BITS_DEPLOYMENTS};
pub use params::{
    consensus_params, hash256_from_hex, hash256_to_hex, ConsensusParams, GovernanceParams,
    Hash256, HexError, MasternodeParams, Network, ALL_NETWORKS,
};
