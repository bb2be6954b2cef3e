use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer, filter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .without_time()
        .with_target(false)
        .try_init();
}

pub fn init_info_only() {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_filter(filter::filter_fn(|m| m.level() == &Level::INFO)),
        )
        .try_init();
}
