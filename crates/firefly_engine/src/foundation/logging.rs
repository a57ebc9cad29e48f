//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system with a default filter.
///
/// `RUST_LOG` in the environment takes precedence over `filter`, which
/// normally comes from [`crate::core::config::LogSettings`]. Safe to call
/// more than once; later calls are ignored.
pub fn init(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}
