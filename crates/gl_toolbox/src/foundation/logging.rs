//! Logging setup
//!
//! The toolbox logs through the `log` facade. Verbose pipeline messages are
//! emitted at `info` level with a `[GL]` prefix, driver information with a
//! `[GL-INFO]` prefix, so `RUST_LOG=info` shows both.

pub use log::{debug, error, info, trace, warn};

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system
///
/// Honors `RUST_LOG`; falls back to [`DEFAULT_FILTER`]. Calling it more than
/// once is harmless.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Initialize logging for unit tests (captured by the test harness)
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
