//! Logging utilities and structured logging support

/// Initialize the logging system
///
/// Honors `RUST_LOG`; defaults to `info` when it is unset.
pub fn init() {
    init_with_level("info");
}

/// Initialize the logging system with a default filter such as `"debug"`
/// or `"scene_engine=trace"`
///
/// `RUST_LOG` still takes precedence. Calling this more than once is harmless.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
