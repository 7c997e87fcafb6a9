//! Runtime configuration from environment variables, read once at command start.

use std::env;
use std::path::PathBuf;

pub const BIND_ENV: &str = "AMMOGUIDE_BIND";
pub const ASSETS_DIR_ENV: &str = "AMMOGUIDE_ASSETS_DIR";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory containing `visualizations/`. Chart paths in the table resolve against it.
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            assets_dir: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        ServerConfig {
            bind_addr: non_empty(BIND_ENV).unwrap_or(defaults.bind_addr),
            assets_dir: non_empty(ASSETS_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
        }
    }

    pub fn visualizations_dir(&self) -> PathBuf {
        self.assets_dir.join("visualizations")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = ServerConfig::from_lookup(|key| {
            (key == ASSETS_DIR_ENV).then(|| "  ".to_string())
        });
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn overrides_are_read() {
        let config = ServerConfig::from_lookup(|key| match key {
            BIND_ENV => Some("0.0.0.0:8080".to_string()),
            ASSETS_DIR_ENV => Some("/srv/ammo".to_string()),
            _ => None,
        });
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.visualizations_dir(), PathBuf::from("/srv/ammo/visualizations"));
    }
}
