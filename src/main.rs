#![allow(warnings)]
//! Shopping List Frontend Entry Point

mod models;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if rolling_logger::init_logger("ShoppingList", rolling_logger::DEFAULT_CAPACITY, log::LevelFilter::Debug).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialized".into());
    }
    mount_to_body(App);
}
