//! Console Logger
//!
//! `log` backend that forwards records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

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
        let line = format_record(record);
        let msg: wasm_bindgen::JsValue = line.as_str().into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug => web_sys::console::log_1(&msg),
            Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    // "todo_ui::todos" -> "[TODOS]"
    let module = record.target().rsplit("::").next().unwrap_or_default();
    format!("[{}] {}", module.to_uppercase(), record.args())
}

/// Install the console logger; later calls are ignored
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_prefix() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("created {}", "abc"))
                .target("todo_ui::todos")
                .level(Level::Debug)
                .build(),
        );
        assert_eq!(line, "[TODOS] created abc");
    }
}
