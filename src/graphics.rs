//! Camera and sprite synchronisation.
//!
//! The session knows nothing about entities; after each frame's fixed ticks,
//! [`sync_faller_sprites_system`] pairs every faller with a sprite by its
//! session id, spawning and despawning sprites as fallers come and go.

use crate::assets::GameAssets;
use crate::config::GameConfig;
use crate::falling::FallerKind;
use crate::simulation::ActiveSession;
use bevy::prelude::*;
use std::collections::HashMap;

/// Marks the ship sprite.
#[derive(Component)]
pub struct ShipSprite;

/// Sprite for one faller, keyed by its session id.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallerSprite {
    pub id: u64,
    pub kind: FallerKind,
}

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}

/// Startup system: spawn the ship sprite at the session's starting position.
pub fn spawn_ship_sprite(
    mut commands: Commands,
    assets: Res<GameAssets>,
    session: Res<ActiveSession>,
    config: Res<GameConfig>,
) {
    let hitbox = session.ship.hitbox;
    let screen = Vec2::new(config.screen_width, config.screen_height);
    commands.spawn((
        Sprite {
            image: assets.ship.clone(),
            custom_size: Some(hitbox.size()),
            ..default()
        },
        Transform::from_translation(hitbox.world_center(screen).extend(1.0)),
        ShipSprite,
    ));
}

/// Move the ship sprite to the ship's hitbox.
pub fn sync_ship_sprite_system(
    session: Res<ActiveSession>,
    config: Res<GameConfig>,
    mut ship: Query<&mut Transform, With<ShipSprite>>,
) {
    let Ok(mut transform) = ship.single_mut() else {
        return;
    };
    let screen = Vec2::new(config.screen_width, config.screen_height);
    let center = session.ship.hitbox.world_center(screen);
    transform.translation.x = center.x;
    transform.translation.y = center.y;
}

/// Reconcile faller sprites with the session's asteroid and crystal lists.
pub fn sync_faller_sprites_system(
    mut commands: Commands,
    session: Res<ActiveSession>,
    config: Res<GameConfig>,
    assets: Res<GameAssets>,
    mut sprites: Query<(Entity, &FallerSprite, &mut Transform)>,
) {
    let screen = Vec2::new(config.screen_width, config.screen_height);
    let mut live: HashMap<(u64, FallerKind), Vec2> = session
        .fallers()
        .map(|f| ((f.id, f.kind), f.hitbox.world_center(screen)))
        .collect();

    for (entity, sprite, mut transform) in sprites.iter_mut() {
        match live.remove(&(sprite.id, sprite.kind)) {
            Some(center) => {
                transform.translation.x = center.x;
                transform.translation.y = center.y;
            }
            None => commands.entity(entity).despawn(),
        }
    }

    // Whatever is left has no sprite yet.
    for faller in session.fallers() {
        let Some(center) = live.remove(&(faller.id, faller.kind)) else {
            continue;
        };
        commands.spawn((
            Sprite {
                image: assets.faller_image(faller.kind),
                custom_size: Some(faller.hitbox.size()),
                ..default()
            },
            Transform::from_translation(center.extend(0.5)),
            FallerSprite {
                id: faller.id,
                kind: faller.kind,
            },
        ));
    }
}
