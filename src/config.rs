use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.sbom-reconcilr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Registry pacing and HTTP behavior.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Report file naming.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Tuning for the outbound registry calls.
#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    /// Delay applied before every outbound registry call, in milliseconds.
    #[serde(default = "default_pacing_ms")]
    pub pacing_delay_ms: u64,
    /// Per-request HTTP timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_pacing_ms() -> u64 {
    250
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            pacing_delay_ms: default_pacing_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RegistryConfig {
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Basename prefix for every emitted report file.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "compliance_merged_report".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.sbom-reconcilr/config.toml`
/// 3. `~/.config/sbom-reconcilr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = Path::new(".sbom-reconcilr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("sbom-reconcilr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
