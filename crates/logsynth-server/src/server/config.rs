//! Runtime configuration for the server binary.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;

/// Command-line arguments, each with an environment-variable fallback.
#[derive(Debug, Parser)]
#[command(name = "logsynth-server", version, about)]
pub struct CliArgs {
    /// Address and port to listen on.
    #[arg(long, env = "LOGSYNTH_LISTEN_ADDR", default_value = "0.0.0.0:4000")]
    pub listen_addr: String,

    /// Capacity of the emission request queue. Submissions wait when full.
    #[arg(long, env = "LOGSYNTH_QUEUE_CAPACITY", default_value_t = 5)]
    pub queue_capacity: usize,

    /// Emit human-readable log output instead of JSON.
    #[arg(long, env = "LOGSYNTH_PRETTY_LOGS", default_value_t = false)]
    pub pretty_logs: bool,
}

/// Validated server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub queue_capacity: usize,
    pub pretty_logs: bool,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> anyhow::Result<Self> {
        let listen_addr = args
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {:?}", args.listen_addr))?;
        anyhow::ensure!(args.queue_capacity > 0, "queue capacity must be at least 1");

        Ok(Self {
            listen_addr,
            queue_capacity: args.queue_capacity,
            pretty_logs: args.pretty_logs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            listen_addr: "127.0.0.1:4000".to_string(),
            queue_capacity: 5,
            pretty_logs: false,
        }
    }

    #[test]
    fn accepts_valid_args() {
        let config = ServerConfig::try_from(args()).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:4000".parse().unwrap());
        assert_eq!(config.queue_capacity, 5);
    }

    #[test]
    fn rejects_unparseable_listen_addr() {
        let mut bad = args();
        bad.listen_addr = "nowhere".to_string();
        assert!(ServerConfig::try_from(bad).is_err());
    }

    #[test]
    fn rejects_zero_queue_capacity() {
        let mut bad = args();
        bad.queue_capacity = 0;
        assert!(ServerConfig::try_from(bad).is_err());
    }
}
