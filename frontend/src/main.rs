use crate::app::{App, AppProps};

mod app;
mod components;
mod config;
mod http;
mod logger;
mod notifier;
mod tops_sheet;

fn main() {
    let config = config::load();
    logger::init(&config.log_level);
    log::info!("admin console starting, api base {}", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
