use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Structured logging with environment-based filtering.
///
/// Defaults to INFO, with debug output for this crate; RUST_LOG overrides.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,logistics_tracking=debug")),
        )
        .init();
}
