//! Command-line configuration for the server binary.

use std::fmt;
use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output (development)
    Pretty,
    /// One JSON object per line (production)
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "receipt-points",
    version,
    about = "Score purchase receipts over HTTP"
)]
pub struct CliArgs {
    /// Address to listen on.
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log output format. Verbosity comes from `RUST_LOG` (default `info`).
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Self {
        let CliArgs { bind, log_format } = args;
        Self {
            bind_address: bind,
            log_format,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_args(CliArgs::parse_from(["receipt-points"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::parse_from([
            "receipt-points",
            "--bind",
            "127.0.0.1:9000",
            "--log-format",
            "json",
        ]);
        let config = ServerConfig::from_args(args);
        assert_eq!(config.bind_address, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_bad_address() {
        let result = CliArgs::try_parse_from(["receipt-points", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
