//! Logging setup for the hours-sync binary.
//!
//! Diagnostics go to stderr so that tables printed on stdout stay clean.

use tracing::Span;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "hours_sync=info";

/// Builds the filter from `RUST_LOG`, or from `verbosity` when unset.
///
/// `verbosity` counts `-v` flags: 0 is `info`, 1 is `debug`, more is `trace`.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbosity {
        0 => EnvFilter::new(DEFAULT_FILTER),
        1 => EnvFilter::new("hours_sync=debug"),
        _ => EnvFilter::new("hours_sync=trace"),
    })
}

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(verbosity: u8) -> bool {
    let formatting_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(formatting_layer)
        .try_init()
        .is_ok()
}

/// Root span for one invocation, tagged with a fresh correlation id.
pub fn run_span(command: &str) -> (Uuid, Span) {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("run", run_id = %run_id, command = command);
    (run_id, span)
}
