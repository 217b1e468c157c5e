//! Presentation wiring: sprites, score HUD and the game-over banner.
//!
//! ## System Responsibilities
//!
//! | System                        | Schedule            | Purpose                           |
//! |-------------------------------|---------------------|-----------------------------------|
//! | `load_game_assets`            | Startup             | Queue sprites and sounds          |
//! | `setup_camera`                | Startup             | Spawn the 2D camera               |
//! | `spawn_ship_sprite`           | Startup             | Spawn the ship sprite             |
//! | `setup_hud_score`             | Startup             | Spawn permanent score HUD node    |
//! | `asset_failure_system`        | Update              | Exit on asset load failure        |
//! | `sync_ship_sprite_system`     | Update              | Follow the ship hitbox            |
//! | `sync_faller_sprites_system`  | Update              | Spawn/move/despawn faller sprites |
//! | `hud_score_display_system`    | Update              | Refresh score HUD text            |
//! | `setup_game_over`             | `OnEnter(GameOver)` | Spawn centred banner              |
//! | `cleanup_game_over`           | `OnExit(GameOver)`  | Despawn banner                    |

use crate::assets::{asset_failure_system, load_game_assets};
use crate::audio::GameAudioPlugin;
use crate::config::GameConfig;
use crate::graphics::{
    setup_camera, spawn_ship_sprite, sync_faller_sprites_system, sync_ship_sprite_system,
};
use crate::simulation::{init_session, ActiveSession, GamePhase};
use bevy::prelude::*;

pub const GAME_OVER_TEXT: &str = "Game Over! Press R to restart";

/// Marker for the permanent score HUD node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Everything the player sees and hears. Pairs with
/// [`crate::simulation::SessionPlugin`].
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_plugins(GameAudioPlugin)
            .add_systems(
                Startup,
                (
                    load_game_assets,
                    setup_camera,
                    setup_hud_score,
                    spawn_ship_sprite
                        .after(load_game_assets)
                        .after(init_session),
                ),
            )
            .add_systems(
                Update,
                (
                    asset_failure_system,
                    sync_ship_sprite_system,
                    sync_faller_sprites_system,
                    hud_score_display_system,
                ),
            )
            .add_systems(OnEnter(GamePhase::GameOver), setup_game_over)
            .add_systems(OnExit(GamePhase::GameOver), cleanup_game_over);
    }
}

/// Format the HUD line for a score.
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

// ── Startup: score HUD ────────────────────────────────────────────────────────

/// Spawn the permanent score HUD in the top-left corner.
pub fn setup_hud_score(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_label(0)),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// ── Update: score HUD ─────────────────────────────────────────────────────────

/// Refresh the score HUD when the session changes.
pub fn hud_score_display_system(
    session: Res<ActiveSession>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !session.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(score_label(session.score));
            }
        }
    }
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

/// Spawn the game-over banner centred over the frozen play field.
pub fn setup_game_over(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new(GAME_OVER_TEXT),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Despawn the game-over banner.
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
