//! Todo Widget Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod storage;
mod store;
mod todos;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(AppConfig::default().log_level);
    mount_to_body(App);
}
