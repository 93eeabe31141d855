use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to initialize tracing: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
