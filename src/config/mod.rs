use std::path::PathBuf;

use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

const ENV_PREFIX: &str = "RIMS_";

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// File that receives the tracing output (`RIMS_LOG_FILE`)
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Filter directive for the subscriber (`RIMS_LOG_LEVEL`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from `RIMS_`-prefixed environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn load() -> Result<Self> {
        let config = envy::prefixed(ENV_PREFIX).from_env::<Config>()?;

        Ok(config)
    }

    /// Replace values with those given on the command line
    pub fn override_with(&mut self, log_file: Option<PathBuf>, log_level: Option<String>) {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
    }
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("rims-dashboard.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    // Ensure .env file is loaded
    dotenv().ok();

    Config::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_use_defaults() {
        let vars: Vec<(String, String)> = Vec::new();
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .unwrap();

        assert_eq!(config.log_level, "info");
        assert!(config.log_file.ends_with("rims-dashboard.log"));
    }

    #[test]
    fn prefixed_variables_are_read() {
        let vars = vec![
            ("RIMS_LOG_FILE".to_string(), "/var/log/rims.log".to_string()),
            ("RIMS_LOG_LEVEL".to_string(), "debug".to_string()),
        ];
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .unwrap();

        assert_eq!(config.log_file, PathBuf::from("/var/log/rims.log"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn command_line_values_win() {
        let mut config = Config {
            log_file: default_log_file(),
            log_level: default_log_level(),
        };
        config.override_with(Some(PathBuf::from("here.log")), None);

        assert_eq!(config.log_file, PathBuf::from("here.log"));
        assert_eq!(config.log_level, "info");
    }
}
