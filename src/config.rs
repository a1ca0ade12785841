//! Host configuration loaded from YAML.
//!
//! ```yaml
//! team_name: Rust Strategy Server
//! reverse_coordinates: false
//! log_capacity: 2000
//! log_level: info
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::diagnostics::{DEFAULT_LOG_CAPACITY, Severity};
use crate::{Result, StrategyError};

/// Team name reported when none is configured.
pub const DEFAULT_TEAM_NAME: &str = "Rust Strategy Server";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Name returned from `get_team_info`
    pub team_name: String,
    /// Mirror the pitch for a strategy written for the other side
    pub reverse_coordinates: bool,
    /// Entries kept by the diagnostic log
    pub log_capacity: usize,
    /// Lowest severity returned by `StrategyHost::visible_log`
    pub log_level: Severity,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            team_name: DEFAULT_TEAM_NAME.to_string(),
            reverse_coordinates: false,
            log_capacity: DEFAULT_LOG_CAPACITY,
            log_level: Severity::Info,
        }
    }
}

impl HostConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(text)
            .map_err(|e| StrategyError::Config { details: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StrategyError::file_error(path.to_path_buf(), e))?;
        let config = Self::from_yaml(&text)?;
        debug!(path = %path.display(), ?config, "Loaded host configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.team_name.trim().is_empty() {
            return Err(StrategyError::Config { details: "team_name must not be empty".to_string() });
        }
        if self.log_capacity == 0 {
            return Err(StrategyError::Config {
                details: "log_capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
