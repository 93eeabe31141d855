pub mod config;
pub mod error;
pub mod logging;
pub mod record;

pub use ::config::ConfigError;
pub use record::{ConfirmationMessage, Record};

/// Default cap on the size of an inbound request body (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;
