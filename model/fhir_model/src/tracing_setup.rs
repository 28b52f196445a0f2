//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Only the first call has an effect, so every entry point may call it.
/// Nothing is installed unless `RUST_LOG` is set; use
/// `RUST_LOG=fhir_choice=debug` for one line per sealed slot and
/// `RUST_LOG=fhir_choice=trace` for every resolved candidate.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
