//! Gateway configuration.
//!
//! Defaults are overridable through environment variables; malformed values
//! fall back to the default rather than aborting startup.

use matching_engine::EngineConfig;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to. `GATEWAY_ADDR`.
    pub listen_addr: SocketAddr,
    /// Engine tuning: `PUBSUB_CAPACITY`, `SNAPSHOT_DEPTH`.
    pub engine: EngineConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            engine: EngineConfig::default(),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(addr) = env_parsed("GATEWAY_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(capacity) = env_parsed("PUBSUB_CAPACITY") {
            config.engine.pubsub_capacity = capacity;
        }
        if let Some(depth) = env_parsed("SNAPSHOT_DEPTH") {
            config.engine.snapshot_depth = depth;
        }

        config
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|raw| raw.parse().ok())
}
