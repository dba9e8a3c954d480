//! Mock data store server settings.

use serde::{Deserialize, Serialize};

fn default_addr() -> String {
    "127.0.0.1:4280".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address for `toh serve`.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Simulated latency added to every response, in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            latency_ms: 0,
        }
    }
}
