use dados_shared::{error::SharedError, ConfigError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Shared(#[from] SharedError),
}
