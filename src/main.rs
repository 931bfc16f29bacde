//! Task List Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    match rolling_logger::init(LoggerConfig::default()) {
        Ok(logger) => {
            // Panic report first, then the records leading up to it
            std::panic::set_hook(Box::new(move |info| {
                console_error_panic_hook::hook(info);
                logger.dump("Recent log records before panic");
            }));
        }
        Err(e) => {
            console_error_panic_hook::set_once();
            web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
        }
    }
    mount_to_body(App);
}
