//! `log` backend selection.
//!
//! The browser build writes through `console_log`; native builds (unit
//! tests, tools) use `env_logger` on stderr.

/// Install the logger for the current target at `level`. Later calls are
/// no-ops.
pub fn init(level: log::Level) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(level);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .is_test(cfg!(test))
            .try_init();
    }
}
