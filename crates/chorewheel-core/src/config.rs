use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Top-level config (chorewheel.toml + CHOREWHEEL_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChorewheelConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Default for ChorewheelConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file. The parent directory is created
    /// on startup if missing.
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_db_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.chorewheel/chorewheel.db", home)
}

impl ChorewheelConfig {
    /// Load config from a TOML file with CHOREWHEEL_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.chorewheel/chorewheel.toml
    ///
    /// Every field has a default, so a missing file yields the default
    /// config rather than an error.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: ChorewheelConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("CHOREWHEEL_").split("_"))
            .extract()
            .map_err(|e| crate::error::ChorewheelError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.chorewheel/chorewheel.toml", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_port_5000() {
        let config = ChorewheelConfig::default();
        assert_eq!(config.gateway.port, 5000);
        assert_eq!(config.gateway.bind, "0.0.0.0");
    }

    #[test]
    fn default_db_path_lives_under_home() {
        let config = ChorewheelConfig::default();
        assert!(config.database.path.ends_with("/.chorewheel/chorewheel.db"));
    }

    #[test]
    fn load_with_missing_file_falls_back_to_defaults() {
        let config = ChorewheelConfig::load(Some("/nonexistent/chorewheel.toml"))
            .expect("missing file should not be fatal");
        assert_eq!(config.gateway.port, DEFAULT_PORT);
    }
}
