//! Optional `tracing` subscriber bootstrap for programs embedding the crate.
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

/// Install a fmt subscriber at `level`; `RUST_LOG` overrides when set.
///
/// Safe to call more than once, and a no-op if another global subscriber is
/// already installed.
pub fn init_logging(level: tracing::Level) {
    LOGGING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
