use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::history::DEFAULT_STORAGE_KEY;
use crate::session::DEFAULT_CHECK_DELAY;

/// Global configuration loaded from `~/.config/urlcheck/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlcheckConfig {
    /// Milliseconds a check waits before reporting its result (0 = immediate).
    pub check_delay_ms: u64,
    /// Key the history is stored under.
    pub storage_key: String,
    /// Directory for persisted state. If missing, `~/.local/state/urlcheck` is used.
    pub state_dir: Option<PathBuf>,
}

impl Default for UrlcheckConfig {
    fn default() -> Self {
        Self {
            check_delay_ms: DEFAULT_CHECK_DELAY.as_millis() as u64,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            state_dir: None,
        }
    }
}

impl UrlcheckConfig {
    pub fn check_delay(&self) -> Duration {
        Duration::from_millis(self.check_delay_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlcheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlcheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlcheckConfig::default();
        assert_eq!(cfg.check_delay_ms, 1000);
        assert_eq!(cfg.check_delay(), Duration::from_secs(1));
        assert_eq!(cfg.storage_key, "validationHistory");
        assert!(cfg.state_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlcheckConfig {
            check_delay_ms: 250,
            storage_key: "checks".to_string(),
            state_dir: Some(PathBuf::from("/var/lib/urlcheck")),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlcheckConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: UrlcheckConfig = toml::from_str("check_delay_ms = 0").unwrap();
        assert_eq!(cfg.check_delay(), Duration::ZERO);
        assert_eq!(cfg.storage_key, "validationHistory");
        assert!(cfg.state_dir.is_none());

        let empty: UrlcheckConfig = toml::from_str("").unwrap();
        assert_eq!(empty, UrlcheckConfig::default());
    }

    #[test]
    fn config_toml_rejects_wrong_types() {
        assert!(toml::from_str::<UrlcheckConfig>("check_delay_ms = \"soon\"").is_err());
    }
}
