//! Test support shared by unit and integration tests

use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Default when `RUST_LOG` is unset: crate events at info, so unresolved
/// transaction warnings and run summaries show up in failing test output.
const DEFAULT_TEST_FILTER: &str = "warn,rslimit=info";

/// Installs the test logging subscriber once per test binary.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        // test writer so output is captured per test
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_filter(env_filter),
            )
            .try_init();

        match installed {
            Ok(()) => debug!("test logging installed"),
            Err(e) => eprintln!("Error: Failed to set up logging: {}", e),
        }
    });
}
