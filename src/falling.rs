//! Asteroids and crystals: everything that falls from the top of the screen.
//!
//! Both kinds share one shape and one motion rule; they differ only in size,
//! base speed and what happens when they touch the ship (which the session
//! decides, not the faller).

use crate::config::GameConfig;
use crate::geometry::Hitbox;
use rand::Rng;

/// Which sprite and rules a [`Faller`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallerKind {
    /// Ends the session on contact.
    Asteroid,
    /// Collected on contact for score and game speed.
    Crystal,
}

impl FallerKind {
    /// Edge length of the square hitbox.
    pub fn size(self, config: &GameConfig) -> f32 {
        match self {
            FallerKind::Asteroid => config.asteroid_size,
            FallerKind::Crystal => config.crystal_size,
        }
    }

    /// Fall speed at `game_speed == 1.0`.
    pub fn base_speed(self, config: &GameConfig) -> f32 {
        match self {
            FallerKind::Asteroid => config.asteroid_base_speed,
            FallerKind::Crystal => config.crystal_base_speed,
        }
    }
}

/// A falling entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faller {
    /// Session-unique identifier, used to pair the entity with its sprite.
    pub id: u64,
    pub kind: FallerKind,
    pub hitbox: Hitbox,
    /// Pixels per tick, fixed at spawn time. Fractional speeds such as
    /// `3.3` move sub-pixel amounts; positions are not snapped to whole pixels.
    pub speed: f32,
}

impl Faller {
    /// Spawn at a uniformly random whole-pixel column with the bottom edge at `y = 0`.
    pub fn spawn<R: Rng + ?Sized>(
        kind: FallerKind,
        id: u64,
        game_speed: f32,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        let size = kind.size(config);
        let max_x = (config.screen_width - size).floor().max(0.0) as u32;
        let x = rng.gen_range(0..=max_x) as f32;
        Self::spawn_at(kind, id, x, game_speed, config)
    }

    /// Spawn at an exact column, bottom edge at `y = 0`.
    pub fn spawn_at(kind: FallerKind, id: u64, x: f32, game_speed: f32, config: &GameConfig) -> Self {
        let size = kind.size(config);
        Self {
            id,
            kind,
            hitbox: Hitbox::new(x, -size, size, size),
            speed: kind.base_speed(config) * game_speed,
        }
    }

    /// Advance one tick.
    #[inline]
    pub fn fall(&mut self) {
        self.hitbox.y += self.speed;
    }

    /// `true` once the top edge has passed the bottom of the play area.
    #[inline]
    pub fn is_below(&self, screen_height: f32) -> bool {
        self.hitbox.top() > screen_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_column_always_fits_on_screen() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for id in 0..2_000 {
            for kind in [FallerKind::Asteroid, FallerKind::Crystal] {
                let faller = Faller::spawn(kind, id, 1.0, &config, &mut rng);
                assert!(faller.hitbox.left() >= 0.0);
                assert!(faller.hitbox.right() <= config.screen_width);
                assert_eq!(faller.hitbox.x.fract(), 0.0);
            }
        }
    }

    #[test]
    fn spawn_sits_just_above_the_screen() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let asteroid = Faller::spawn(FallerKind::Asteroid, 0, 1.0, &config, &mut rng);
        assert_eq!(asteroid.hitbox.bottom(), 0.0);
        assert_eq!(asteroid.hitbox.size(), bevy::math::Vec2::splat(40.0));

        let crystal = Faller::spawn(FallerKind::Crystal, 1, 1.0, &config, &mut rng);
        assert_eq!(crystal.hitbox.bottom(), 0.0);
        assert_eq!(crystal.hitbox.size(), bevy::math::Vec2::splat(30.0));
    }

    #[test]
    fn speed_scales_with_game_speed() {
        let config = GameConfig::default();
        let asteroid = Faller::spawn_at(FallerKind::Asteroid, 0, 0.0, 1.5, &config);
        let crystal = Faller::spawn_at(FallerKind::Crystal, 1, 0.0, 1.5, &config);
        assert!((asteroid.speed - 4.5).abs() < 1e-6);
        assert!((crystal.speed - 3.0).abs() < 1e-6);
    }

    #[test]
    fn fall_moves_down_by_speed() {
        let config = GameConfig::default();
        let mut crystal = Faller::spawn_at(FallerKind::Crystal, 0, 100.0, 1.0, &config);
        crystal.fall();
        crystal.fall();
        assert_eq!(crystal.hitbox.y, -26.0);
        assert_eq!(crystal.hitbox.x, 100.0);
    }

    #[test]
    fn fractional_speed_is_not_truncated() {
        let config = GameConfig::default();
        let mut asteroid = Faller::spawn_at(FallerKind::Asteroid, 0, 0.0, 1.1, &config);
        for _ in 0..10 {
            asteroid.fall();
        }
        // 10 ticks at 3.3 px: 33 px, not the 30 px whole-pixel steps would give.
        assert!((asteroid.hitbox.y - (-40.0 + 33.0)).abs() < 1e-4);
    }

    #[test]
    fn below_screen_requires_top_edge_past_bottom() {
        let config = GameConfig::default();
        let mut asteroid = Faller::spawn_at(FallerKind::Asteroid, 0, 0.0, 1.0, &config);
        asteroid.hitbox.y = config.screen_height;
        assert!(!asteroid.is_below(config.screen_height));
        asteroid.hitbox.y += 1.0;
        assert!(asteroid.is_below(config.screen_height));
    }
}
