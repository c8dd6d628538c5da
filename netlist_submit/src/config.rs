use crate::prelude::*;
use anyhow::Result;
use netlist_check::CheckConfig;
use solver_client::DEFAULT_SOLVER_URL;
use std::path::Path;
use std::time::Duration;

/// Environment variable pointing at a JSON config file
pub const CONFIG_ENV_VAR: &str = "NETLIST_SUBMIT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    pub solver_url: String,
    pub timeout_secs: u64,
    #[serde(flatten)]
    pub checks: CheckConfig,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            solver_url: DEFAULT_SOLVER_URL.to_string(),
            timeout_secs: 30,
            checks: CheckConfig::default(),
        }
    }
}

impl SubmitConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Reads the file named by [`CONFIG_ENV_VAR`], defaults when it is not set.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                info!("Loading config from {path:?}");
                Self::load(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
