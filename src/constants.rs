//! Centralised gameplay constants.
//!
//! Every tuneable value lives here so it can be found and reasoned about in one
//! place. [`crate::config::GameConfig`] uses these as its compiled defaults;
//! `assets/game.toml` may override any of them at startup.
//!
//! Speeds are expressed in **pixels per tick**, not pixels per second: the
//! session advances exactly one step per fixed tick.

// ── Screen ────────────────────────────────────────────────────────────────────

/// Width of the play area in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Height of the play area in pixels.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Fixed simulation rate. One session tick runs per fixed step.
pub const TICK_RATE_HZ: f64 = 60.0;

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Ship sprite and hitbox edge length.
pub const SHIP_SIZE: f32 = 50.0;

/// Horizontal displacement per tick while a direction key is held.
pub const SHIP_SPEED: f32 = 5.0;

/// Gap between the ship's bottom edge and the bottom of the screen.
pub const SHIP_BOTTOM_MARGIN: f32 = 10.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Asteroid sprite and hitbox edge length.
pub const ASTEROID_SIZE: f32 = 40.0;

/// Asteroid fall speed at `game_speed == 1.0`.
pub const ASTEROID_BASE_SPEED: f32 = 3.0;

/// Ticks between asteroid spawns.
pub const ASTEROID_SPAWN_INTERVAL: u32 = 60;

// ── Crystals ──────────────────────────────────────────────────────────────────

/// Crystal sprite and hitbox edge length.
pub const CRYSTAL_SIZE: f32 = 30.0;

/// Crystal fall speed at `game_speed == 1.0`.
pub const CRYSTAL_BASE_SPEED: f32 = 2.0;

/// Ticks between crystal spawns.
pub const CRYSTAL_SPAWN_INTERVAL: u32 = 120;

/// Score awarded per collected crystal.
pub const CRYSTAL_REWARD: u32 = 10;

/// Added to the game-speed multiplier per collected crystal.
///
/// Only affects fallers spawned afterwards; fallers already on screen keep
/// the speed they were spawned with.
pub const SPEED_INCREASE_RATE: f32 = 0.1;

/// Game-speed multiplier at the start of every session.
pub const INITIAL_GAME_SPEED: f32 = 1.0;

// ── Presentation ──────────────────────────────────────────────────────────────

/// Font size of the score HUD and the game-over banner.
pub const HUD_FONT_SIZE: f32 = 28.0;

/// Directory (relative to the asset root) holding sprites and sounds.
pub const ASSET_DIR: &str = "assets";

/// Default location of the optional TOML override file.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Environment variable that overrides [`CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "SPACE_SCAVENGER_CONFIG";

pub const SHIP_IMAGE: &str = "spaceship.png";
pub const ASTEROID_IMAGE: &str = "asteroid.png";
pub const CRYSTAL_IMAGE: &str = "energy_crystal.png";
pub const BACKGROUND_MUSIC: &str = "background_music.wav";
pub const CLASH_SOUND: &str = "clash_sound.wav";

/// Every file the game needs at startup.
pub const REQUIRED_ASSETS: [&str; 5] = [
    SHIP_IMAGE,
    ASTEROID_IMAGE,
    CRYSTAL_IMAGE,
    BACKGROUND_MUSIC,
    CLASH_SOUND,
];
