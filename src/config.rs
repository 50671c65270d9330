use crate::error::{CropWatchError, Result};
use crate::models::DEFAULT_LOCATION;
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";
const DEFAULT_FORECAST_DAYS: u32 = 3;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub weather: WeatherConfig,
    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_forecast_days() -> u32 {
    DEFAULT_FORECAST_DAYS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl WeatherConfig {
    /// Bound on a single weather fetch. Zero is treated as the default.
    pub fn timeout(&self) -> Duration {
        let secs = if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout_secs
        };
        Duration::from_secs(secs)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            forecast_days: DEFAULT_FORECAST_DAYS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("forecast_days", &self.forecast_days)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvisoryConfig {
    #[serde(default = "default_location")]
    pub default_location: String,
    #[serde(default)]
    pub default_crop: Option<String>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            default_crop: None,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(CropWatchError::Config(format!(
                "Config file not found at {:?}. Run `cropwatch init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropWatchError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    /// Parse YAML after substituting `${VAR}` references from the environment.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CropWatchError::Config(format!("Failed to parse config: {}", e)))?;

        if config.weather.forecast_days == 0 {
            return Err(CropWatchError::Config(
                "weather.forecast_days must be at least 1".into(),
            ));
        }

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("cropwatch").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/cropwatch/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropWatchError::Config("Cannot determine config directory".into()))?
            .join("cropwatch");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive(crops: &[&str]) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up CropWatch!");
        println!();

        println!("WeatherAPI.com");
        let api_key: String = Password::new()
            .with_prompt("  API key")
            .interact()
            .map_err(|e| CropWatchError::Config(format!("Input error: {}", e)))?;

        let forecast_days: u32 = Input::new()
            .with_prompt("  Forecast days")
            .default(DEFAULT_FORECAST_DAYS)
            .interact_text()
            .map_err(|e| CropWatchError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Advisory defaults");
        let default_location: String = Input::new()
            .with_prompt("  Location (city)")
            .default(DEFAULT_LOCATION.into())
            .interact_text()
            .map_err(|e| CropWatchError::Config(format!("Input error: {}", e)))?;

        let default_crop: String = Input::new()
            .with_prompt(format!("  Crop ({}, or blank)", crops.join(", ")))
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CropWatchError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            weather: WeatherConfig {
                api_key,
                forecast_days: forecast_days.max(1),
                ..WeatherConfig::default()
            },
            advisory: AdvisoryConfig {
                default_location,
                default_crop: Some(default_crop).filter(|c| !c.trim().is_empty()),
            },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CropWatchError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# CropWatch Configuration\n# Generated by `cropwatch init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
