//! Telemetry helpers for applications embedding `resale-map`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can either call
//! `init_default_tracing` or wire their own `tracing` subscriber and filters.

/// Filter used when `RUST_LOG` is unset: this crate at `info`, others at `warn`.
pub const DEFAULT_FILTER_DIRECTIVES: &str = "warn,resale_map=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER_DIRECTIVES));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FILTER_DIRECTIVES, init_default_tracing};

    #[test]
    fn default_filter_scopes_info_to_this_crate() {
        assert!(DEFAULT_FILTER_DIRECTIVES.contains("resale_map=info"));
        assert!(DEFAULT_FILTER_DIRECTIVES.starts_with("warn"));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn init_is_a_no_op_without_the_feature() {
        assert!(!init_default_tracing());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
