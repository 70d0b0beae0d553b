mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("{} starting, api at {}", config::APP_NAME, config::api_base_url());

    // Fall back to <body> when the page has no #app mount point
    let root = document()
        .get_element_by_id("app")
        .map(|el| el.unchecked_into::<web_sys::HtmlElement>())
        .or_else(|| document().body());

    match root {
        Some(root) => mount_to(root, App).forget(),
        None => log::error!("no element to mount the app into"),
    }
}
