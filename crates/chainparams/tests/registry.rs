use skt_chainparams::{ChainParamsError, ParameterRegistry};
use skt_consensus::Network;

#[test]
fn unknown_name_is_rejected() {
    let registry = ParameterRegistry::new();
    let err = registry.activate("bogus").unwrap_err();
    assert_eq!(err, ChainParamsError::UnknownChain("bogus".to_string()));
    assert_eq!(err.to_string(), "Unknown chain `bogus`");
    assert!(registry.try_current().is_none());

    registry.activate("regtest").expect("regtest");
    assert!(registry.activate("bogus").is_err());
    assert_eq!(registry.current().network, Network::Regtest);
}

#[test]
fn activated_profile_is_current() {
    let registry = ParameterRegistry::new();
    let selected = registry.activate("main").expect("main");
    assert_eq!(selected.default_port, 19_683);

    let current = registry.current();
    assert_eq!(current.network_id(), "main");
    assert_eq!(current.default_port, 19_683);
    assert_eq!(registry.active_network(), Some(Network::Main));
}

#[test]
fn switching_networks_is_refused() {
    let registry = ParameterRegistry::new();
    registry.activate("test").expect("test");

    let err = registry.activate("main").unwrap_err();
    assert_eq!(
        err,
        ChainParamsError::AlreadyActive {
            active: Network::Test,
            requested: Network::Main,
        }
    );
    assert_eq!(registry.current().network_id(), "test");
}

#[test]
#[should_panic(expected = "before a network was activated")]
fn current_before_activation_panics() {
    let registry = ParameterRegistry::new();
    let _ = registry.current();
}

#[test]
fn concurrent_readers_see_one_profile() {
    let registry = ParameterRegistry::new();
    registry.activate("regtest").expect("regtest");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let params = registry.current();
                    (params.network, params.default_port, params.genesis_hash())
                })
            })
            .collect();
        for handle in handles {
            let (network, port, genesis) = handle.join().expect("reader thread");
            assert_eq!(network, Network::Regtest);
            assert_eq!(port, 17_683);
            assert_eq!(genesis, registry.profile(Network::Regtest).genesis_hash());
        }
    });
}

#[test]
fn racing_activations_agree_on_one_network() {
    let registry = ParameterRegistry::new();
    let names = ["main", "test", "regtest", "main", "test", "regtest"];

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|name| scope.spawn(|| registry.activate(name).map(|p| p.network)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("activator thread"))
            .collect()
    });

    let winner = registry.current().network;
    for result in results {
        match result {
            Ok(network) => assert_eq!(network, winner),
            Err(ChainParamsError::AlreadyActive { active, .. }) => assert_eq!(active, winner),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
