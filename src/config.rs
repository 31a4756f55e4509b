//! Process configuration from flags and environment

use std::net::{IpAddr, SocketAddr};

use clap::Parser;

/// Match function gRPC server
#[derive(Parser, Debug, Clone)]
#[command(name = "match_function")]
#[command(
    about = "Stat-driven ticket validation and enrichment for the matchmaking host",
    long_about = None
)]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(long, env = "MATCH_FUNCTION_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind to
    #[arg(short, long, env = "MATCH_FUNCTION_PORT", default_value_t = 6565)]
    pub port: u16,

    /// Distinct rule documents kept decoded; 0 disables the cache
    #[arg(long, env = "RULE_CACHE_CAPACITY", default_value_t = 64)]
    pub rule_cache_capacity: usize,

    /// tracing-subscriber filter directives
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
