use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL of the unified backend as observed on the LAN. Production
/// deployments override this in config.toml.
pub const DEFAULT_BASE_URL: &str = "http://172.17.132.1:5000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tsunami: TsunamiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TsunamiConfig {
    /// Lookback window for `/api/tsunami?hours=N`. Omitted from the request
    /// when unset; the backend then defaults to 24.
    pub hours: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Tab shown at startup; unknown names fall back to the blog tab.
    pub start_tab: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        let app_dir = home_dir.join(".config").join("weatherhub-tui");

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir.join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;
        Ok(())
    }

    /// Effective base URL: configured value or the built-in default.
    pub fn base_url(&self) -> String {
        self.server
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// Simple URL validation
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_configured_base_url_wins() {
        let config = Config {
            server: ServerConfig {
                base_url: Some("http://weather.example.com".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://weather.example.com");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [tsunami]
            hours = 48
            "#,
        )
        .unwrap();
        assert_eq!(config.tsunami.hours, Some(48));
        assert!(config.server.base_url.is_none());
        assert!(config.ui.start_tab.is_none());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("http://localhost:5000").is_ok());
        assert!(validate_url("https://weather.example.com").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("ftp://host").is_err());
    }
}
