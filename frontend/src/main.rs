mod app;
mod component;
mod config;
mod page;
mod plugin;
mod route;

use anyhow::Context;
use app::Application;
use config::Config;
use plugin::chart::ChartPlugin;
use tracing::error;

fn start(config: Config) -> anyhow::Result<()> {
    let routes = coinview_common::routes::app_routes()
        .context("invalid route table")?;

    Application::new(routes)
        .base(config.base)
        .plugin(ChartPlugin::default())
        .mount(&config.mount_id)
}

fn main() {
    console_error_panic_hook::set_once();

    // Logger level comes from config, so parse it first and report later
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));

    if let Err(e) = config.and_then(start) {
        error!(?e, "failed to start");
    }
}
