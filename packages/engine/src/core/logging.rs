//! `log` backend that writes to the browser console.
//!
//! Installed once from `init()`. Native builds fall back to stderr so the same
//! records stay visible when the engine runs outside a browser.

#[cfg(target_arch = "wasm32")]
use log::Level;
use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[floodsim {}] {}", record.level(), record.args());

        #[cfg(target_arch = "wasm32")]
        {
            let msg = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&msg),
                Level::Warn => web_sys::console::warn_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the console. Later calls are ignored.
pub fn init_console_logger(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
