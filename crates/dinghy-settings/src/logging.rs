use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::settings::Logging;

/// Initialize a tracing subscriber from the logging settings.
///
/// The `RUST_LOG` environment variable takes precedence over
/// `logging.level`, which falls back to "info" when empty. Logs go to
/// `logging.file` (appended) when set, stdout otherwise.
///
/// Only one subscriber can be installed per process; a second call
/// returns an error.
pub fn init(logging: &Logging) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = if logging.level.is_empty() {
        "info".to_string()
    } else {
        logging.level.to_lowercase()
    };

    let writer = if logging.file.is_empty() {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&logging.file)?;
        BoxMakeWriter::new(Arc::new(file))
    };

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(logging.file.is_empty())
        .with_writer(writer)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
