use skt_consensus::Network;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChainParamsError {
    UnknownChain(String),
    AlreadyActive {
        active: Network,
        requested: Network,
    },
    GenesisMismatch {
        network: Network,
        field: &'static str,
        expected: String,
        actual: String,
    },
}

impl std::fmt::Display for ChainParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainParamsError::UnknownChain(name) => write!(f, "Unknown chain `{name}`"),
            ChainParamsError::AlreadyActive { active, requested } => write!(
                f,
                "chain parameters already active for `{active}`, cannot switch to `{requested}`"
            ),
            ChainParamsError::GenesisMismatch {
                network,
                field,
                expected,
                actual,
            } => write!(
                f,
                "{network} genesis {field} mismatch (expected {expected}, got {actual})"
            ),
        }
    }
}

impl std::error::Error for ChainParamsError {}
