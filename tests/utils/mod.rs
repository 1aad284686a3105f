use std::sync::Once;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// to ensure we only ever register tracing once,
/// in the first test that gets run.
static INIT_TRACING_ONCE: Once = Once::new();

/// Initialize tracing for integration tests
pub(super) fn init_tracing() {
    INIT_TRACING_ONCE.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::TRACE.into())
                    .from_env_lossy(),
            )
            .init();
    });
}
