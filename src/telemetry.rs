//! Tracing subscriber setup
//!
//! Logs go to stderr so they never interleave with screens printed on stdout.
//! `RUST_LOG` takes precedence over the configured level.

use anyhow::{Result, anyhow};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::config::LoggingConfig;

/// Install the global subscriber. `verbose` raises the default level to `debug`.
pub fn init(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(&logging.format, std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

/// `json` gives one object per event, anything else the multi-line pretty format
fn fmt_layer<S, W>(format: &str, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        "json" => fmt::layer().json().with_writer(writer).boxed(),
        _ => fmt::layer().pretty().with_writer(writer).boxed(),
    }
}
