use leptos::prelude::*;

mod config;
mod error;
mod game;
mod gpu;
mod logging;
mod render_loop;
mod ui;

use config::GameConfig;
use logging::{LoggingConfig, init_logging};
use ui::App;

fn main() {
    init_logging(LoggingConfig::default());

    let config = web_sys::window()
        .and_then(|window| window.document())
        .map(|document| GameConfig::from_document(&document))
        .unwrap_or_default();

    leptos::mount::mount_to_body(move || {
        view! { <App config=config /> }
    })
}
