pub use config::{builder::DefaultState, ConfigBuilder};

use config::{ConfigError, Environment, File};
use serde::{de::DeserializeOwned, Deserialize};
use std::fmt::Debug;
use tracing::debug;

use crate::DEFAULT_MAX_BODY_BYTES;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

/// Configuration of the record store service.
#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationConfiguration {
    pub log_format: LogFormat,
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl ApplicationConfiguration {
    pub const CONFIG_FILE: &'static str = "dados_application/config.yaml";
    pub const ENV_PREFIX: &'static str = "DADOS";

    /// Loads `.env` (if present), then layers the config file and `DADOS__*` environment variables over the
    /// defaults.
    pub fn new() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::load(Self::CONFIG_FILE, Self::ENV_PREFIX)
    }

    pub fn load(file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = config_builder()
            .set_default("log_format", "json")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080_i64)?
            .set_default("max_body_bytes", DEFAULT_MAX_BODY_BYTES as i64)?;

        load_configuration(defaults, file, env_prefix)
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Loads variables from a `.env` file in the working directory, if there is one.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

pub fn config_builder() -> ConfigBuilder<DefaultState> {
    config::Config::builder()
}

/// Layers an optional file and prefixed environment variables (`<PREFIX>__<KEY>`) on top of `defaults` and
/// deserializes the result.
pub fn load_configuration<T>(defaults: ConfigBuilder<DefaultState>, file: &str, env_prefix: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Debug,
{
    defaults
        .add_source(File::with_name(file).required(false))
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
        .inspect(|config: &T| debug!("{:#?}", config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_environment() {
        let config = ApplicationConfiguration::load("does/not/exist.yaml", "DADOS_DEFAULTS_ONLY").unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.socket_address(), "0.0.0.0:8080");
        assert_eq!(config.max_body_bytes, 1_048_576);
    }
}
