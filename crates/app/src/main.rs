use dioxus::prelude::*;
use std::str::FromStr;
use tracing::Level;

mod clock;
mod components;
mod config;
mod format_helpers;
mod routes;
mod shell;
use shell::ShellState;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    let fallbacks = config::load_config();
    let config = config::config();

    let level = Level::from_str(&config.logging.level).unwrap_or(Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logging] subscriber already installed: {e}");
    }
    for e in &fallbacks {
        tracing::warn!(error = %e, "configuration fallback");
    }
    tracing::info!(
        tick_ms = config.verification.tick_ms,
        step = config.verification.step,
        completion_delay_ms = config.verification.completion_delay_ms,
        "configuration loaded"
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ShellState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            routes::Root {}
        }
    }
}
