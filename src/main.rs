// src/main.rs
mod app;
mod card;
mod confetti;
mod config;
mod evasion;
mod geometry;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
