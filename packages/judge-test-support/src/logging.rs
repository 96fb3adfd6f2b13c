//! Test logging shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet unless asked otherwise.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Install the test subscriber once per process.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_TEST_FILTER`].
/// `TEST_LOG=janken_judge=debug` shows every polling round and announcement.
pub fn init() {
    init_with_default(DEFAULT_TEST_FILTER);
}

/// Like [`init`], with a caller-chosen fallback filter. Only the first call
/// in a process has any effect.
pub fn init_with_default(fallback: &str) {
    INITIALIZED.get_or_init(|| {
        let filter = ["TEST_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
            .map(EnvFilter::new)
            .unwrap_or_else(|| EnvFilter::new(fallback));

        // try_init: another harness may already own the global subscriber
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .compact()
            .try_init();
    });
}
