use leptos::mount::mount_to_body;
use log::Level;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    // only fails if a logger is already installed
    console_log::init_with_level(level).ok();

    mount_to_body(App);
}

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod routes;

pub use crate::app::App;
