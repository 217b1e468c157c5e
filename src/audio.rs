//! Background music and the collision cue.
//!
//! Playback is fire-and-forget: each sound is an entity carrying an
//! [`AudioPlayer`]. Stopping the music means despawning its entity.

use crate::assets::{load_game_assets, GameAssets};
use crate::simulation::{SessionRestarted, ShipDestroyed};
use bevy::prelude::*;

/// Marks the looping background-music entity.
#[derive(Component)]
pub struct BackgroundMusic;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_background_music.after(load_game_assets))
            .add_systems(Update, (ship_destroyed_audio_system, restart_audio_system));
    }
}

fn spawn_music(commands: &mut Commands, assets: &GameAssets) {
    commands.spawn((
        AudioPlayer::new(assets.background_music.clone()),
        PlaybackSettings::LOOP,
        BackgroundMusic,
    ));
}

/// Startup system: begin the music loop for the first session.
pub fn start_background_music(mut commands: Commands, assets: Res<GameAssets>) {
    spawn_music(&mut commands, &assets);
}

/// Play the clash cue and silence the music when the ship is hit.
pub fn ship_destroyed_audio_system(
    mut commands: Commands,
    mut destroyed: MessageReader<ShipDestroyed>,
    assets: Res<GameAssets>,
    music: Query<Entity, With<BackgroundMusic>>,
) {
    if destroyed.read().last().is_none() {
        return;
    }
    commands.spawn((
        AudioPlayer::new(assets.clash_sound.clone()),
        PlaybackSettings::DESPAWN,
    ));
    for entity in music.iter() {
        commands.entity(entity).despawn();
    }
}

/// Restart the music loop for a new session.
pub fn restart_audio_system(
    mut commands: Commands,
    mut restarted: MessageReader<SessionRestarted>,
    assets: Res<GameAssets>,
    music: Query<Entity, With<BackgroundMusic>>,
) {
    if restarted.read().last().is_none() {
        return;
    }
    for entity in music.iter() {
        commands.entity(entity).despawn();
    }
    spawn_music(&mut commands, &assets);
}
