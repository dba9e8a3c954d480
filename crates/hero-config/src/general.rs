//! General application configuration.

use serde::{Deserialize, Serialize};

/// Heroes shown on the dashboard.
const fn default_dashboard_size() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Number of "top heroes" listed by the dashboard.
    #[serde(default = "default_dashboard_size")]
    pub dashboard_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            dashboard_size: default_dashboard_size(),
        }
    }
}
