//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::filters::DEFAULT_DEBOUNCE;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Default location of the optional settings file (extension resolved by
/// the `config` crate).
pub const DEFAULT_CONFIG_PATH: &str = "config/settings";
/// Number of searches kept in the history file.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Settings shared by the CLI and the list services.
pub struct AppConfig {
    pub default_page_size: usize,
    pub debounce_ms: u64,
    pub history_path: String,
    pub history_limit: usize,
}

impl AppConfig {
    /// Builds the configuration from defaults, the optional settings file at
    /// `path` and `VELORA_*` environment variables, in increasing precedence.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("default_page_size", DEFAULT_PAGE_SIZE as i64)?
            .set_default("debounce_ms", DEFAULT_DEBOUNCE.as_millis() as i64)?
            .set_default("history_path", "search_history.json")?
            .set_default("history_limit", DEFAULT_HISTORY_LIMIT as i64)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("VELORA"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist").expect("defaults load");

        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "default_page_size: 10\nhistory_limit: 5").expect("write yaml");

        let path = file.path().to_string_lossy().to_string();
        let config = AppConfig::load(&path).expect("config loads");

        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.history_path, "search_history.json");
    }
}
