//! Sandbox application: a title screen, an options screen, and a small
//! sprite playground, wired through the engine's scene runtime.

mod options;
mod scenes;

use std::path::Path;

use anyhow::Result;
use tessera_engine::core::AppConfig;
use tessera_engine::logging::{LoggingConfig, init_logging};
use tessera_engine::window::App;

use options::{OPTIONS_PATH, Options};
use scenes::{GameScene, OptionsScene, TitleScene};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let options = Options::load(Path::new(OPTIONS_PATH));
    let config = AppConfig {
        title: "Sandbox".to_owned(),
        window_dims: options.window_dims,
        fullscreen: options.fullscreen,
        volume: options.volume,
        ..AppConfig::default()
    };

    App::run(
        config,
        vec![
            Box::new(TitleScene::default()),
            Box::new(OptionsScene::default()),
            Box::new(GameScene::default()),
        ],
        scenes::TITLE,
    )
}
