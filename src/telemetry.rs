//! Telemetry helpers for applications embedding `interval-chart`.
//!
//! Tracing setup stays opt-in. Hosts either call [`init_default_tracing`] or
//! install their own `tracing` subscriber; plot and renderer code only emit
//! events (`trace` per skipped item, `debug` per built frame).

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
