//! Telemetry helpers for hosts embedding the dashboard engine.
//!
//! The engine emits `tracing` events on selection changes and recomputation
//! outcomes but never installs a subscriber on its own. Hosts that want
//! those events on stderr without wiring their own subscriber can call
//! `init_default_tracing`; everyone else configures `tracing` as usual.

/// Installs a compact stderr `tracing` subscriber when the `telemetry`
/// feature is enabled, honoring `RUST_LOG` and defaulting to `info`.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or
/// if a global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
