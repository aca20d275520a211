// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::{AppContext, DEFAULT_STORAGE_FILENAME};
use anyhow::Result;
use serde::Deserialize;
use std::fs;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_storage_file() -> String {
    DEFAULT_STORAGE_FILENAME.to_string()
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// One of off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Cross out completed items in the TUI.
    #[serde(default)]
    pub strikethrough_completed: bool,
    /// Name of the key/value file inside the data directory.
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            strikethrough_completed: false,
            storage_file: default_storage_file(),
        }
    }
}

impl Config {
    /// Load the configuration using an explicit context.
    ///
    /// A missing file yields the defaults; unreadable or malformed files are
    /// errors so a typo never silently resets the user's settings.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            eprintln!(
                "Unknown log level '{}' in config, using info",
                self.log_level
            );
            log::LevelFilter::Info
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn test_missing_file_gives_defaults() {
        let ctx = TestContext::new();
        assert_eq!(Config::load(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn test_load_full_file() {
        let ctx = TestContext::new();
        fs::write(
            ctx.get_config_file_path().unwrap(),
            "log_level = \"debug\"\nstrikethrough_completed = true\nstorage_file = \"lists.json\"\n",
        )
        .unwrap();

        let cfg = Config::load(&ctx).unwrap();
        assert_eq!(
            cfg,
            Config {
                log_level: "debug".into(),
                strikethrough_completed: true,
                storage_file: "lists.json".into(),
            }
        );
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let ctx = TestContext::new();
        fs::write(
            ctx.get_config_file_path().unwrap(),
            "strikethrough_completed = true\n",
        )
        .unwrap();
        let cfg = Config::load(&ctx).unwrap();
        assert!(cfg.strikethrough_completed);
        assert_eq!(cfg.storage_file, "storage.json");
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let ctx = TestContext::new();
        fs::write(ctx.get_config_file_path().unwrap(), "log_level = [").unwrap();
        assert!(Config::load(&ctx).is_err());
    }
}
