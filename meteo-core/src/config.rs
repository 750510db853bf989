use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Environment variable overriding [`Config::geocoding_base_url`].
pub const GEOCODING_URL_ENV: &str = "METEO_GEOCODING_URL";
/// Environment variable overriding [`Config::forecast_base_url`].
pub const FORECAST_URL_ENV: &str = "METEO_FORECAST_URL";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// geocoding_base_url = "https://geocoding-api.open-meteo.com/v1/search"
/// forecast_base_url = "https://api.open-meteo.com/v1/forecast"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoding_base_url: String,
    pub forecast_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_base_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_base_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults on first run), then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    /// Load config from an explicit file, returning defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use the public endpoints.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Replace base URLs with any non-empty value returned by `lookup` for
    /// the override variables. Values must be http(s) URLs.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(GEOCODING_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.geocoding_base_url = checked_url(&url).context(GEOCODING_URL_ENV)?;
            tracing::debug!("Geocoding URL overridden by {GEOCODING_URL_ENV}");
        }
        if let Some(url) = lookup(FORECAST_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.forecast_base_url = checked_url(&url).context(FORECAST_URL_ENV)?;
            tracing::debug!("Forecast URL overridden by {FORECAST_URL_ENV}");
        }
        Ok(())
    }

    pub fn set_geocoding_base_url(&mut self, url: &str) -> Result<()> {
        self.geocoding_base_url = checked_url(url)?;
        Ok(())
    }

    pub fn set_forecast_base_url(&mut self, url: &str) -> Result<()> {
        self.forecast_base_url = checked_url(url)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        checked_url(&self.geocoding_base_url).context("geocoding_base_url")?;
        checked_url(&self.forecast_base_url).context("forecast_base_url")?;
        Ok(())
    }

    /// Save config to the platform config directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "meteo", "meteo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn checked_url(url: &str) -> Result<String> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("'{url}' is not an http(s) URL");
    }
    Ok(url.to_string())
}
