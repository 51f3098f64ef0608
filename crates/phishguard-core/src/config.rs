use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public deployment of the prediction API.
pub const DEFAULT_PREDICTOR_URL: &str = "https://phishing-backend-production-002e.up.railway.app";

/// Environment variable that overrides `predictor_url` from the config file.
pub const PREDICTOR_URL_ENV: &str = "PHISHGUARD_PREDICTOR_URL";

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Base URL of the prediction API (`/predict` and `/health` are appended).
    pub predictor_url: String,
    /// Optional total request timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Optional connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for PhishguardConfig {
    fn default() -> Self {
        Self {
            predictor_url: DEFAULT_PREDICTOR_URL.to_string(),
            timeout_secs: None,
            connect_timeout_secs: None,
            user_agent: None,
        }
    }
}

impl PhishguardConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// Applies `PHISHGUARD_PREDICTOR_URL` if it is set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(PREDICTOR_URL_ENV) {
            self.apply_predictor_override(&url);
        }
    }

    fn apply_predictor_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::debug!("predictor url overridden: {}", url);
            self.predictor_url = url.to_string();
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// The environment override is applied on top of whatever was loaded.
pub fn load_or_init() -> Result<PhishguardConfig> {
    let path = config_path()?;
    let mut cfg = load_or_init_at(&path)?;
    cfg.apply_env();
    Ok(cfg)
}

/// Same as [`load_or_init`] for an explicit path, without the environment override.
pub fn load_or_init_at(path: &Path) -> Result<PhishguardConfig> {
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PhishguardConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
