use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the number of `-v` flags to a filter directive.
///
/// Stdout carries the password, so anything below `warn` stays quiet
/// unless asked for.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Setup diagnostic logging on stderr.
///
/// The filter comes only from `verbosity`; no environment variable is read.
///
/// # Arguments
/// * `verbosity` - Count of `-v` flags
pub fn setup_logging(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_new(level_for(verbosity))
        .context("Failed to build log filter")?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::debug!(verbosity, "Logging initialized");
    Ok(())
}
