//! Logging initialization.
//!
//! Logs go to stderr so stdout carries only the rendered lookup.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global tracing subscriber.
///
/// `verbose` lowers the threshold from WARN to DEBUG. Serving always logs at
/// INFO or below so request traces are visible.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize_logging(verbose: bool, serving: bool) -> Result<()> {
    let level = if verbose {
        Level::DEBUG
    } else if serving {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
