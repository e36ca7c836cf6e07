use std::net::SocketAddr;

use clap::Parser;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "version99=debug,tower_http=debug";

/// Server configuration, read from flags with environment fallbacks
#[derive(Debug, Clone, Parser)]
#[command(name = "version99", version, about = "Virtual Maven 2 repository serving version 99.0-does-not-exist")]
pub struct ServerConfig {
    /// Host:port on which to listen
    #[arg(long, env = "VERSION99_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, env = "VERSION99_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
