//! Task List Frontend Entry Point

mod app;
mod client;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod models;
mod rows;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[APP] starting, api base {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
