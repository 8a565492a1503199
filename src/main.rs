use log::LevelFilter;
use std::rc::Rc;

mod components;
mod config;
mod content;
mod error;
mod logging;
mod model;
mod route;
mod state;
mod util;

use components::App;
use components::app::AppProps;
use config::GameConfig;

fn main() {
    logging::init(LevelFilter::Info);
    let config = GameConfig::load();
    log::set_max_level(config.log_level());
    log::info!("EcoLearn starting, {} badges configured", config.badges.len());
    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
}
