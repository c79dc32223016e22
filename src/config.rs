use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Policy thresholds for time-based status inference. The defaults are
/// calibrated for US major-league game lengths; shorter formats (soccer,
/// MMA cards) override them in config.toml.
#[derive(Debug, Deserialize, Clone)]
pub struct StatusConfig {
    /// Minutes around the scheduled start treated as the live window.
    #[serde(default = "default_live_window")]
    pub live_window_min: i64,
    /// Minutes past the scheduled start after which a game with no feed
    /// status is treated as finished (awaiting settlement).
    #[serde(default = "default_settled_after")]
    pub settled_after_min: i64,
}

fn default_live_window() -> i64 {
    15
}
fn default_settled_after() -> i64 {
    180
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            live_window_min: 15,
            settled_after_min: 180,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Poll interval for --watch mode.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_s: u64,
}

fn default_snapshot_path() -> String {
    "bets.json".to_string()
}
fn default_refresh_interval() -> u64 {
    30
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            refresh_interval_s: default_refresh_interval(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }
}
