//! Cards UI Entry Point

mod api;
mod app;
mod components;
mod filtering;
mod models;
mod query;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("logger should initialize once");

    mount_to_body(App);
}
