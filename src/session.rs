//! One play session: the ship, everything falling, and the per-tick rules.
//!
//! [`Session`] is plain data with no Bevy dependencies beyond math types, so
//! the whole game can be stepped deterministically in unit tests with a seeded
//! RNG. The Bevy driver in [`crate::simulation`] owns exactly one session.
//!
//! ## Tick order
//!
//! 1. Steer the ship from input.
//! 2. Count towards the next asteroid; spawn one at the interval.
//! 3. Count towards the next crystal; spawn one at the interval.
//! 4. Asteroids, oldest first: fall, then off-screen → removed, else touching
//!    the ship → game over (the asteroid stays where it is).
//! 5. Crystals, oldest first: fall, then off-screen → removed, else touching
//!    the ship → removed, score and game speed go up.
//!
//! Steps 4 and 5 never mutate a list while scanning it: the scan records a
//! [`Fate`] per faller and `retain` applies removals afterwards in the same
//! order, so every live faller is evaluated exactly once per tick.

use crate::config::GameConfig;
use crate::falling::{Faller, FallerKind};
use crate::geometry::Hitbox;
use crate::player::{Ship, ShipInput};
use rand::Rng;

/// What a scan decided for one faller this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fate {
    /// Still on screen, not touching the ship.
    Falling,
    /// Top edge passed the bottom of the screen.
    OffScreen,
    /// Overlaps the ship.
    Struck,
}

/// Summary of a single tick, consumed by logging and the audio/state layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub asteroids_spawned: u32,
    pub crystals_spawned: u32,
    /// Asteroids removed after leaving the screen.
    pub asteroids_cleared: u32,
    /// Crystals removed after leaving the screen uncollected.
    pub crystals_missed: u32,
    pub crystals_collected: u32,
    /// An asteroid hit the ship this tick; the session is now over.
    pub ship_destroyed: bool,
}

/// Complete game state for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: GameConfig,
    pub ship: Ship,
    pub asteroids: Vec<Faller>,
    pub crystals: Vec<Faller>,
    pub score: u32,
    /// Multiplier applied to base fall speeds of newly spawned fallers.
    pub game_speed: f32,
    pub asteroid_spawn_counter: u32,
    pub crystal_spawn_counter: u32,
    pub game_over: bool,
    next_faller_id: u64,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            ship: Ship::at_start(&config),
            asteroids: Vec::new(),
            crystals: Vec::new(),
            score: 0,
            game_speed: crate::constants::INITIAL_GAME_SPEED,
            asteroid_spawn_counter: 0,
            crystal_spawn_counter: 0,
            game_over: false,
            next_faller_id: 0,
            config,
        }
    }

    /// Reset to a fresh session. Only honoured while the game is over.
    ///
    /// Returns `true` if the session was reset.
    pub fn restart(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        *self = Self::new(self.config.clone());
        true
    }

    /// Advance the session by one tick. A no-op once the game is over.
    pub fn tick<R: Rng + ?Sized>(&mut self, input: ShipInput, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.game_over {
            return report;
        }

        self.ship.steer(input, &self.config);

        self.asteroid_spawn_counter += 1;
        if self.asteroid_spawn_counter >= self.config.asteroid_spawn_interval {
            self.spawn(FallerKind::Asteroid, rng);
            self.asteroid_spawn_counter = 0;
            report.asteroids_spawned += 1;
        }

        self.crystal_spawn_counter += 1;
        if self.crystal_spawn_counter >= self.config.crystal_spawn_interval {
            self.spawn(FallerKind::Crystal, rng);
            self.crystal_spawn_counter = 0;
            report.crystals_spawned += 1;
        }

        let ship = self.ship.hitbox;
        let screen_height = self.config.screen_height;

        let fates = advance(&mut self.asteroids, &ship, screen_height);
        for fate in &fates {
            match fate {
                Fate::OffScreen => report.asteroids_cleared += 1,
                Fate::Struck => report.ship_destroyed = true,
                Fate::Falling => {}
            }
        }
        // Struck asteroids stay put: only off-screen ones are removed.
        retain_by_fate(&mut self.asteroids, &fates, |fate| fate != Fate::OffScreen);
        if report.ship_destroyed {
            self.game_over = true;
        }

        let fates = advance(&mut self.crystals, &ship, screen_height);
        for fate in &fates {
            match fate {
                Fate::OffScreen => report.crystals_missed += 1,
                Fate::Struck => {
                    report.crystals_collected += 1;
                    self.score += self.config.crystal_reward;
                    self.game_speed += self.config.speed_increase_rate;
                }
                Fate::Falling => {}
            }
        }
        retain_by_fate(&mut self.crystals, &fates, |fate| fate == Fate::Falling);

        report
    }

    /// Drop a faller at an exact column, as if it had just spawned.
    ///
    /// Used by scripted scenarios and tests in place of a random spawn.
    pub fn drop_faller_at(&mut self, kind: FallerKind, x: f32) -> u64 {
        let id = self.take_id();
        let faller = Faller::spawn_at(kind, id, x, self.game_speed, &self.config);
        self.list_mut(kind).push(faller);
        id
    }

    /// Iterate every faller on screen, asteroids first.
    pub fn fallers(&self) -> impl Iterator<Item = &Faller> {
        self.asteroids.iter().chain(self.crystals.iter())
    }

    fn spawn<R: Rng + ?Sized>(&mut self, kind: FallerKind, rng: &mut R) {
        let id = self.take_id();
        let faller = Faller::spawn(kind, id, self.game_speed, &self.config, rng);
        self.list_mut(kind).push(faller);
    }

    fn list_mut(&mut self, kind: FallerKind) -> &mut Vec<Faller> {
        match kind {
            FallerKind::Asteroid => &mut self.asteroids,
            FallerKind::Crystal => &mut self.crystals,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_faller_id;
        self.next_faller_id += 1;
        id
    }
}

/// Read pass: move every faller once and decide its fate.
fn advance(fallers: &mut [Faller], ship: &Hitbox, screen_height: f32) -> Vec<Fate> {
    fallers
        .iter_mut()
        .map(|faller| {
            faller.fall();
            if faller.is_below(screen_height) {
                Fate::OffScreen
            } else if faller.hitbox.intersects(ship) {
                Fate::Struck
            } else {
                Fate::Falling
            }
        })
        .collect()
}

/// Write pass: keep fallers whose fate satisfies `keep`, preserving order.
fn retain_by_fate(fallers: &mut Vec<Faller>, fates: &[Fate], keep: impl Fn(Fate) -> bool) {
    let mut fates = fates.iter().copied();
    fallers.retain(|_| fates.next().is_some_and(&keep));
}

// ── Unit tests ────────────────────────────────────────────────────────────────
