//! Sprite and sound loading.
//!
//! Missing files are caught before the app starts by [`verify_asset_files`];
//! decode failures reported later by the asset server are caught by
//! [`asset_failure_system`]. Both are fatal: there is no in-game fallback art.

use crate::config::{asset_root, GameConfig};
use crate::constants::{
    ASTEROID_IMAGE, BACKGROUND_MUSIC, CLASH_SOUND, CRYSTAL_IMAGE, REQUIRED_ASSETS, SHIP_IMAGE,
};
use crate::error::{GameError, GameResult};
use crate::falling::FallerKind;
use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

/// Handles to every sprite and sound the game uses.
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub ship: Handle<Image>,
    pub asteroid: Handle<Image>,
    pub crystal: Handle<Image>,
    pub background_music: Handle<AudioSource>,
    pub clash_sound: Handle<AudioSource>,
}

impl GameAssets {
    pub fn faller_image(&self, kind: FallerKind) -> Handle<Image> {
        match kind {
            FallerKind::Asteroid => self.asteroid.clone(),
            FallerKind::Crystal => self.crystal.clone(),
        }
    }

    fn tracked(&self) -> [(&'static str, UntypedAssetId); 5] {
        [
            (SHIP_IMAGE, self.ship.id().untyped()),
            (ASTEROID_IMAGE, self.asteroid.id().untyped()),
            (CRYSTAL_IMAGE, self.crystal.id().untyped()),
            (BACKGROUND_MUSIC, self.background_music.id().untyped()),
            (CLASH_SOUND, self.clash_sound.id().untyped()),
        ]
    }
}

/// Check that every required file exists before the window opens.
pub fn verify_asset_files(config: &GameConfig) -> GameResult<()> {
    let dir = asset_root().join(&config.asset_dir);
    println!("ℹ Looking for assets in {}", dir.display());
    for name in REQUIRED_ASSETS {
        let path = dir.join(name);
        if !path.is_file() {
            return Err(GameError::MissingAsset { path });
        }
    }
    println!("✓ All {} assets present", REQUIRED_ASSETS.len());
    Ok(())
}

/// Startup system: queue every asset and store the handles.
///
/// Must run before any system that spawns sprites or audio.
pub fn load_game_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        ship: asset_server.load(SHIP_IMAGE),
        asteroid: asset_server.load(ASTEROID_IMAGE),
        crystal: asset_server.load(CRYSTAL_IMAGE),
        background_music: asset_server.load(BACKGROUND_MUSIC),
        clash_sound: asset_server.load(CLASH_SOUND),
    });
    info!("[SETUP] Game assets queued");
}

/// Exit with an error as soon as any asset fails to load.
pub fn asset_failure_system(
    assets: Res<GameAssets>,
    asset_server: Res<AssetServer>,
    mut exit: MessageWriter<AppExit>,
) {
    for (name, id) in assets.tracked() {
        if let LoadState::Failed(err) = asset_server.load_state(id) {
            let err = GameError::AssetLoad {
                path: name.to_string(),
                reason: err.to_string(),
            };
            error!("{err}");
            exit.write(AppExit::error());
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_reports_first_required_file() {
        let config = GameConfig {
            asset_dir: "no-such-asset-dir".to_string(),
            ..GameConfig::default()
        };
        match verify_asset_files(&config) {
            Err(GameError::MissingAsset { path }) => {
                assert!(path.ends_with(SHIP_IMAGE), "unexpected path {path:?}");
            }
            other => panic!("expected MissingAsset, got {other:?}"),
        }
    }
}
