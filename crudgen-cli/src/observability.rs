//! Diagnostics setup
//!
//! Installs a `tracing` subscriber writing to stderr so generated output and
//! the console report on stdout stay separate.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of diagnostic events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Single-line human readable events (default)
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

/// Default filter directive for a `-v` count
///
/// # Examples
///
/// ```
/// # use crudgen_lib::observability::default_directive;
/// assert_eq!(default_directive(0), "warn");
/// assert_eq!(default_directive(2), "debug");
/// ```
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbosity`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8, format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
