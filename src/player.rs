//! The player's ship and its input pipeline.
//!
//! ## Pipeline (runs every `FixedUpdate` tick while playing)
//!
//! 1. [`keyboard_to_ship_input_system`] — samples held arrow keys into [`ShipInput`].
//! 2. [`crate::simulation::session_tick_system`] — hands [`ShipInput`] to
//!    [`Ship::steer`] as the first step of the session tick.
//!
//! The input abstraction (`ShipInput`) keeps movement testable: tests populate
//! the resource directly, or press keys on `ButtonInput<KeyCode>`.

use crate::config::GameConfig;
use crate::geometry::Hitbox;
use bevy::prelude::*;

/// Held direction keys for the current tick.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipInput {
    pub left: bool,
    pub right: bool,
}

impl ShipInput {
    pub const IDLE: Self = Self {
        left: false,
        right: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
}

/// The player-controlled ship. Moves horizontally only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub hitbox: Hitbox,
}

impl Ship {
    /// Ship centred horizontally, resting `ship_bottom_margin` above the bottom edge.
    pub fn at_start(config: &GameConfig) -> Self {
        let size = config.ship_size;
        let x = (config.screen_width * 0.5).floor() - (size * 0.5).floor();
        let y = config.screen_height - config.ship_bottom_margin - size;
        Self {
            hitbox: Hitbox::new(x, y, size, size),
        }
    }

    /// Apply one tick of horizontal movement.
    ///
    /// A direction only moves the ship while that edge is still inside the
    /// screen; the final clamp keeps the hitbox within `[0, screen_width]`
    /// whatever `ship_speed` is configured to.
    pub fn steer(&mut self, input: ShipInput, config: &GameConfig) {
        let hitbox = &mut self.hitbox;
        if input.left && hitbox.left() > 0.0 {
            hitbox.x -= config.ship_speed;
        }
        if input.right && hitbox.right() < config.screen_width {
            hitbox.x += config.ship_speed;
        }
        hitbox.x = hitbox.x.clamp(0.0, config.screen_width - hitbox.width);
    }
}

/// Translate held arrow keys into [`ShipInput`].
///
/// - **←** → `left`
/// - **→** → `right`
///
/// Both may be held at once; the movements then cancel out.
pub fn keyboard_to_ship_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<ShipInput>,
) {
    *input = ShipInput {
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
    };
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_starts_centred_above_bottom_margin() {
        let config = GameConfig::default();
        let ship = Ship::at_start(&config);
        assert_eq!(ship.hitbox, Hitbox::new(375.0, 540.0, 50.0, 50.0));
        assert_eq!(ship.hitbox.bottom(), 590.0);
    }

    #[test]
    fn held_left_moves_by_ship_speed() {
        let config = GameConfig::default();
        let mut ship = Ship::at_start(&config);
        ship.steer(ShipInput::LEFT, &config);
        assert_eq!(ship.hitbox.x, 370.0);
    }

    #[test]
    fn both_keys_cancel_out() {
        let config = GameConfig::default();
        let mut ship = Ship::at_start(&config);
        ship.steer(
            ShipInput {
                left: true,
                right: true,
            },
            &config,
        );
        assert_eq!(ship.hitbox.x, 375.0);
    }

    #[test]
    fn ship_stops_at_left_edge() {
        let config = GameConfig::default();
        let mut ship = Ship::at_start(&config);
        for _ in 0..500 {
            ship.steer(ShipInput::LEFT, &config);
            assert!(ship.hitbox.left() >= 0.0);
        }
        assert_eq!(ship.hitbox.left(), 0.0);
    }

    #[test]
    fn ship_stops_at_right_edge() {
        let config = GameConfig::default();
        let mut ship = Ship::at_start(&config);
        for _ in 0..500 {
            ship.steer(ShipInput::RIGHT, &config);
            assert!(ship.hitbox.right() <= config.screen_width);
        }
        assert_eq!(ship.hitbox.right(), config.screen_width);
    }

    #[test]
    fn odd_speed_never_overshoots() {
        let config = GameConfig {
            ship_speed: 7.0,
            ..GameConfig::default()
        };
        let mut ship = Ship::at_start(&config);
        for _ in 0..200 {
            ship.steer(ShipInput::RIGHT, &config);
        }
        assert_eq!(ship.hitbox.right(), config.screen_width);
        for _ in 0..200 {
            ship.steer(ShipInput::LEFT, &config);
        }
        assert_eq!(ship.hitbox.left(), 0.0);
    }

    #[test]
    fn keyboard_system_samples_arrow_keys() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<ShipInput>();
        app.add_systems(Update, keyboard_to_ship_input_system);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowRight);
        app.update();

        assert_eq!(*app.world().resource::<ShipInput>(), ShipInput::RIGHT);
    }
}
