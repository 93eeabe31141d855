use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::LogFormat, error::SharedError};

/// Installs the global subscriber. The level comes from `RUST_LOG` and falls back to `info`.
pub fn init_tracing(log_format: &LogFormat) -> Result<(), SharedError> {
    let registry =
        tracing_subscriber::registry().with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    match log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init()?,
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
    }

    Ok(())
}
