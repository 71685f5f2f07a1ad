//! Dashboard loader configuration.

use serde::{Deserialize, Serialize};
use ui::ChartSettings;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Maximum number of metric rows fetched per page load.
    pub metrics_limit: usize,
    pub login_path: String,
    pub home_path: String,
    pub chart: ChartSettings,
}

impl DashboardConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(ApiError::Config)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            metrics_limit: 30,
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
            chart: ChartSettings::default(),
        }
    }
}
