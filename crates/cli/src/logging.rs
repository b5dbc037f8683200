//! Diagnostic logging for the demo.
//!
//! Logs go to stderr so they never mix with the result line on stdout.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber.
///
/// With `verbose` set the level is `debug`. Otherwise `RUST_LOG` is read,
/// falling back to `warn` if unset or invalid.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub(crate) fn init(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()?;

    Ok(())
}
