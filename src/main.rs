use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod state;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use dotenvy::dotenv;
        dotenv().ok();
        backend::init_tracing();
        eprintln!("[boot] sensor backend at {}", backend::sensor::base_url());
        eprintln!("[boot] weather api at {}", backend::weather::base_url());
    }
    dioxus::launch(app::App);
}
