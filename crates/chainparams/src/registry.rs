//! Selection of the active network profile.

use std::sync::OnceLock;

use skt_consensus::Network;
use skt_log::log_info;

use crate::chain::{chain_params, ChainParams};
use crate::error::ChainParamsError;

/// Holds every network profile and, once activated, the one this process
/// runs against.
///
/// Create one at startup and hand references to consumers. Activation
/// happens at most once; the active profile never changes afterwards.
#[derive(Debug)]
pub struct ParameterRegistry {
    main: ChainParams,
    test: ChainParams,
    regtest: ChainParams,
    active: OnceLock<Network>,
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterRegistry {
    /// Builds all three profiles, panicking on a genesis mismatch.
    pub fn new() -> Self {
        Self {
            main: chain_params(Network::Main),
            test: chain_params(Network::Test),
            regtest: chain_params(Network::Regtest),
            active: OnceLock::new(),
        }
    }

    pub fn profile(&self, network: Network) -> &ChainParams {
        match network {
            Network::Main => &self.main,
            Network::Test => &self.test,
            Network::Regtest => &self.regtest,
        }
    }

    pub fn select(&self, name: &str) -> Result<&ChainParams, ChainParamsError> {
        Network::from_name(name)
            .map(|network| self.profile(network))
            .ok_or_else(|| ChainParamsError::UnknownChain(name.to_string()))
    }

    /// Makes `name` the active network.
    ///
    /// Repeating the activation for the same network is a no-op; asking for a
    /// different one fails and keeps the current profile.
    pub fn activate(&self, name: &str) -> Result<&ChainParams, ChainParamsError> {
        let requested = self.select(name)?.network;
        let mut newly_active = false;
        let active = *self.active.get_or_init(|| {
            newly_active = true;
            requested
        });
        if active != requested {
            return Err(ChainParamsError::AlreadyActive { active, requested });
        }
        if newly_active {
            log_info!("Using {} chain parameters", active);
        }
        Ok(self.profile(active))
    }

    pub fn active_network(&self) -> Option<Network> {
        self.active.get().copied()
    }

    pub fn try_current(&self) -> Option<&ChainParams> {
        self.active_network().map(|network| self.profile(network))
    }

    /// The active profile.
    ///
    /// Panics when called before [`ParameterRegistry::activate`].
    pub fn current(&self) -> &ChainParams {
        match self.try_current() {
            Some(params) => params,
            None => panic!("chain parameters queried before a network was activated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_does_not_activate() {
        let registry = ParameterRegistry::new();
        let params = registry.select("regtest").expect("regtest");
        assert_eq!(params.network, Network::Regtest);
        assert!(registry.try_current().is_none());
        assert_eq!(registry.active_network(), None);
    }

    #[test]
    fn select_is_case_sensitive() {
        let registry = ParameterRegistry::new();
        for name in ["Main", "TEST", "mainnet", "testnet", "", "regtest "] {
            assert_eq!(
                registry.select(name).unwrap_err(),
                ChainParamsError::UnknownChain(name.to_string())
            );
        }
    }

    #[test]
    fn repeat_activation_of_same_network() {
        let registry = ParameterRegistry::new();
        registry.activate("test").expect("first activation");
        let again = registry.activate("test").expect("same network");
        assert_eq!(again.network, Network::Test);
    }
}
