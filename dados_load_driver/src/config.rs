use dados_shared::{
    config::{config_builder, load_configuration, load_dotenv, LogFormat},
    ConfigError,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DriverConfiguration {
    pub log_format: LogFormat,
    pub target_url: String,
    pub total_requests: usize,
    /// Per-request deadline. Requests wait indefinitely when unset.
    pub request_timeout_ms: Option<u64>,
    /// Exit with a failure code when at least one request failed.
    pub fail_on_error: bool,
}

impl DriverConfiguration {
    pub const CONFIG_FILE: &'static str = "dados_load_driver/config.yaml";
    pub const ENV_PREFIX: &'static str = "DADOS_DRIVER";

    pub fn new() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::load(Self::CONFIG_FILE, Self::ENV_PREFIX)
    }

    pub fn load(file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = config_builder()
            .set_default("log_format", "text")?
            .set_default("target_url", "http://localhost:8080/api/dados")?
            .set_default("total_requests", 1000_i64)?
            .set_default("fail_on_error", false)?;

        load_configuration(defaults, file, env_prefix)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_local_service() {
        let config = DriverConfiguration::load("does/not/exist.yaml", "DADOS_DRIVER_DEFAULTS_ONLY").unwrap();

        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.target_url, "http://localhost:8080/api/dados");
        assert_eq!(config.total_requests, 1000);
        assert_eq!(config.request_timeout(), None);
        assert!(!config.fail_on_error);
    }

    #[test]
    fn shipped_config_file_parses() {
        let config = DriverConfiguration::load("config.yaml", "DADOS_DRIVER_FILE_ONLY").unwrap();

        assert_eq!(config.log_format, LogFormat::Text);
        assert!(!config.fail_on_error);
    }
}
