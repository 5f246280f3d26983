//! Logging setup.
//!
//! Everything in the crate logs through the `log` facade. In the browser the
//! records land in the devtools console at the matching severity; on the host
//! (unit tests, tooling) `env_logger` writes them to stderr and honours
//! `RUST_LOG`.

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

static INIT: Once = Once::new();

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;

    pub struct ConsoleLogger;

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }
}

#[cfg(target_arch = "wasm32")]
fn install(config: &LoggingConfig) {
    if log::set_logger(&console::LOGGER).is_ok() {
        log::set_max_level(config.level);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: &LoggingConfig) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.level);
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    }
    // Another logger may already be installed (e.g. by a test harness)
    let _ = builder.try_init();
}

/// Installs the logger once.
///
/// Later calls are ignored, as is the case where another logger was
/// installed first.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(&config);
        log::debug!("logging initialized");
    });
}
