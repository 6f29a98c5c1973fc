use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs the global tracing subscriber for tests, once per process.
///
/// Honors `RUST_LOG`; defaults to `debug` when unset.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
        info!("Test setup complete");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }
}
