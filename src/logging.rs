//! Tracing subscriber setup.
//!
//! Diagnostics go to **stderr**; stdout is reserved for the rename report.

use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set and valid, otherwise `default_level` (e.g. `"warn"`) is used.
/// Calling this more than once is harmless: later calls leave the first subscriber in place.
pub fn tracing_subscribe_boilerplate(default_level: impl Into<String>) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.into()));
        let installed = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::NONE)
                .try_init();
        if installed.is_err() {
                tracing::debug!("global tracing subscriber already set; keeping existing one");
        }
}
