//! Grocery List Frontend Entry Point

mod models;
mod storage;
mod list;
mod draft;
mod sort;
mod summary;
mod config;
mod commands;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Grocery list starting");
    mount_to_body(App);
}
