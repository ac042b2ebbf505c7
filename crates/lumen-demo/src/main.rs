mod app;
mod camera;
mod config;
mod controller;
mod render;
mod scene;

#[cfg(test)]
mod testing;

use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::window::Runtime;

use crate::app::DemoApp;
use crate::config::DemoConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env();
    let app = DemoApp::new(config.shaders.clone(), config.initial_scene);

    if let Err(e) = Runtime::run(config.runtime, config.gl, app) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
