//! LMS Admin Frontend Entry Point

mod config;
mod browser;
mod api;
mod context;
mod store;
mod leads;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    });
    mount_to_body(App);
}
