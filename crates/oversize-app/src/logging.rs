//! Logging initialisation
//!
//! Built on `tracing` / `tracing-subscriber`. Events go to stderr so that
//! stdout only ever carries tool responses.
//!
//! `RUST_LOG` takes precedence over the configured level, e.g.
//! `RUST_LOG=oversize_app=debug`.

use oversize_types::{Error, LogFormat, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
pub fn init(level: &str, format: LogFormat) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| Error::Logging(e.to_string()))?,
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| Error::Logging(e.to_string()))
}

/// Verbose subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
    }
}
