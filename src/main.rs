//! Sefer Market Frontend Entry Point

mod app;
mod cart;
mod catalog;
mod components;
mod context;
mod models;
mod order;
mod screens;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
