use bevy::prelude::*;
use bevy::window::WindowResolution;
use space_scavenger::assets::verify_asset_files;
use space_scavenger::config::GameConfig;
use space_scavenger::error::GameResult;
use space_scavenger::rendering::RenderingPlugin;
use space_scavenger::simulation::SessionPlugin;

/// Load config and check assets before any window or audio device is opened.
fn prepare() -> GameResult<GameConfig> {
    let config = GameConfig::load()?;
    verify_asset_files(&config)?;
    Ok(config)
}

fn main() -> AppExit {
    let config = match prepare() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("✗ {err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Space Scavenger".into(),
                        resolution: WindowResolution::new(
                            config.screen_width as u32,
                            config.screen_height as u32,
                        ),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(AssetPlugin {
                    file_path: config.asset_dir.clone(),
                    ..Default::default()
                }),
        )
        // One session tick per fixed step; speeds are in pixels per tick.
        .insert_resource(Time::<Fixed>::from_hz(config.tick_rate_hz))
        .insert_resource(config)
        .add_plugins((SessionPlugin, RenderingPlugin))
        .run()
}
