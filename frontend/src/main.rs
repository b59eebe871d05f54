use crate::app::App;

mod app;
mod components;
mod config;

/// Pipeline transitions in `common` are logged at debug; release builds keep
/// the console to info and above.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn main() {
    if let Err(e) = console_log::init_with_level(log_level()) {
        gloo_console::error!(format!("Logger unavailable: {e}"));
    }
    yew::Renderer::<App>::new().render();
}
