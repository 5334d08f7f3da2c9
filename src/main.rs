//! Kisan Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod i18n;
mod markdown;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

/// Console warning for a logger that could not be installed
fn logger_warning(result: Result<(), log::SetLoggerError>) -> Option<String> {
    result.err().map(|e| format!("[APP] Console logger not installed: {}", e))
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Some(warning) = logger_warning(console_log::init_with_level(level)) {
        web_sys::console::warn_1(&warning.into());
    }
    log::info!("[APP] Starting dashboard");
    mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;

    impl log::Log for Quiet {
        fn enabled(&self, _: &log::Metadata) -> bool {
            false
        }
        fn log(&self, _: &log::Record) {}
        fn flush(&self) {}
    }

    static QUIET: Quiet = Quiet;

    #[test]
    fn test_second_logger_is_reported() {
        assert_eq!(logger_warning(Ok(())), None);

        let _ = log::set_logger(&QUIET);
        let warning = logger_warning(log::set_logger(&QUIET)).unwrap_or_default();
        assert!(warning.starts_with("[APP] Console logger not installed"));
    }
}
