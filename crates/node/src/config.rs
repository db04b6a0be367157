//! Command-line configuration for `sktd`.

use skt_consensus::Network;
use skt_log::{Format, Level, LogConfig};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    MissingValue(&'static str),
    InvalidValue { flag: &'static str, value: String },
    ConflictingNetworks,
    UnknownArgument(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => write!(f, "missing value for {flag}"),
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "invalid value '{value}' for {flag}")
            }
            ConfigError::ConflictingNetworks => {
                write!(f, "Invalid combination of -regtest and -testnet.")
            }
            ConfigError::UnknownArgument(arg) => write!(f, "unknown argument '{arg}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeConfig {
    /// Network name passed to the registry unchanged.
    pub network: String,
    pub log: LogConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: Network::Main.as_str().to_string(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CliAction {
    Run(NodeConfig),
    PrintHelp,
    PrintVersion,
}

impl NodeConfig {
    pub fn parse<I>(raw_args: I) -> Result<CliAction, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = NodeConfig::default();
        let mut network: Option<String> = None;
        let mut testnet = false;
        let mut regtest = false;

        let mut args = raw_args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--network" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue("--network"))?;
                    network = Some(value);
                }
                "-testnet" | "--testnet" => testnet = true,
                "-regtest" | "--regtest" => regtest = true,
                "--log-level" | "--loglevel" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue("--log-level"))?;
                    config.log.level =
                        Level::parse(&value).ok_or(ConfigError::InvalidValue {
                            flag: "--log-level",
                            value,
                        })?;
                }
                "--log-format" | "--logformat" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue("--log-format"))?;
                    config.log.format =
                        Format::parse(&value).ok_or(ConfigError::InvalidValue {
                            flag: "--log-format",
                            value,
                        })?;
                }
                "--log-timestamps" | "--logtimestamps" => config.log.timestamps = true,
                "--no-log-timestamps" | "--no-logtimestamps" => config.log.timestamps = false,
                "--help" | "-h" => return Ok(CliAction::PrintHelp),
                "--version" | "-V" => return Ok(CliAction::PrintVersion),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        if testnet && regtest {
            return Err(ConfigError::ConflictingNetworks);
        }
        // The shorthand flags override --network, matching the legacy daemon.
        config.network = if regtest {
            Network::Regtest.as_str().to_string()
        } else if testnet {
            Network::Test.as_str().to_string()
        } else {
            network.unwrap_or(config.network)
        };

        Ok(CliAction::Run(config))
    }
}

pub fn usage() -> String {
    [
        "Usage:",
        "  sktd [options]",
        "",
        "Options:",
        "  --help, -h  Print this help and exit",
        "  --version, -V  Print version and exit",
        "  --network <name>  Chain to use: main, test or regtest (default: main)",
        "  -testnet  Use the test chain",
        "  -regtest  Use the regression test chain",
        "  --log-level <level>  error|warn|info|debug|trace (default: info)",
        "  --log-format <format>  text|json (default: text)",
        "  --log-timestamps  Prefix text log lines with a timestamp (default)",
        "  --no-log-timestamps  Omit timestamps from text log lines",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliAction, ConfigError> {
        NodeConfig::parse(args.iter().map(|arg| arg.to_string()))
    }

    fn parse_run(args: &[&str]) -> NodeConfig {
        match parse(args).expect("parse") {
            CliAction::Run(config) => config,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let config = parse_run(&[]);
        assert_eq!(config.network, "main");
        assert_eq!(config.log.level, Level::Info);
        assert_eq!(config.log.format, Format::Text);
        assert!(config.log.timestamps);
    }

    #[test]
    fn network_flags() {
        assert_eq!(parse_run(&["--network", "regtest"]).network, "regtest");
        assert_eq!(parse_run(&["-testnet"]).network, "test");
        assert_eq!(parse_run(&["-regtest"]).network, "regtest");
        assert_eq!(parse_run(&["--network", "main", "-testnet"]).network, "test");
        // Unknown names surface from the registry, not the parser.
        assert_eq!(parse_run(&["--network", "bogus"]).network, "bogus");
    }

    #[test]
    fn testnet_and_regtest_conflict() {
        assert_eq!(
            parse(&["-testnet", "-regtest"]),
            Err(ConfigError::ConflictingNetworks)
        );
    }

    #[test]
    fn log_options() {
        let config = parse_run(&[
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--no-log-timestamps",
        ]);
        assert_eq!(config.log.level, Level::Debug);
        assert_eq!(config.log.format, Format::Json);
        assert!(!config.log.timestamps);

        assert_eq!(
            parse(&["--log-level", "loud"]),
            Err(ConfigError::InvalidValue {
                flag: "--log-level",
                value: "loud".to_string(),
            })
        );
    }

    #[test]
    fn malformed_arguments() {
        assert_eq!(
            parse(&["--network"]),
            Err(ConfigError::MissingValue("--network"))
        );
        assert_eq!(
            parse(&["--datadir"]),
            Err(ConfigError::UnknownArgument("--datadir".to_string()))
        );
        assert_eq!(parse(&["--help", "--bogus"]), Ok(CliAction::PrintHelp));
    }
}
