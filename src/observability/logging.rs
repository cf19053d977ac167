//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Respect `RUST_LOG` when set, fall back to the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Request ids flow through the trace layer for correlation

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_filter` is used when `RUST_LOG` is not set; it accepts the
/// same directive syntax (e.g. `"info"` or `"user_service=debug"`).
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
