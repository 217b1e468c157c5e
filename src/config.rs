//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the constants in
//! [`crate::constants`]. Before the app is built, [`GameConfig::load`] reads
//! the TOML file (or the path in `SPACE_SCAVENGER_CONFIG`) and overwrites the
//! defaults with any values present. Missing keys fall back to the compiled
//! defaults, so a minimal TOML can override just the values you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the authoritative default
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime-tunable gameplay and presentation configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub tick_rate_hz: f64,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_size: f32,
    pub ship_speed: f32,
    pub ship_bottom_margin: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_size: f32,
    pub asteroid_base_speed: f32,
    pub asteroid_spawn_interval: u32,

    // ── Crystals ─────────────────────────────────────────────────────────────
    pub crystal_size: f32,
    pub crystal_base_speed: f32,
    pub crystal_spawn_interval: u32,
    pub crystal_reward: u32,
    pub speed_increase_rate: f32,

    // ── Presentation ─────────────────────────────────────────────────────────
    pub hud_font_size: f32,
    pub asset_dir: String,

    /// Fixed RNG seed for spawn positions. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,
            ship_size: SHIP_SIZE,
            ship_speed: SHIP_SPEED,
            ship_bottom_margin: SHIP_BOTTOM_MARGIN,
            asteroid_size: ASTEROID_SIZE,
            asteroid_base_speed: ASTEROID_BASE_SPEED,
            asteroid_spawn_interval: ASTEROID_SPAWN_INTERVAL,
            crystal_size: CRYSTAL_SIZE,
            crystal_base_speed: CRYSTAL_BASE_SPEED,
            crystal_spawn_interval: CRYSTAL_SPAWN_INTERVAL,
            crystal_reward: CRYSTAL_REWARD,
            speed_increase_rate: SPEED_INCREASE_RATE,
            hud_font_size: HUD_FONT_SIZE,
            asset_dir: ASSET_DIR.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Path of the override file: `$SPACE_SCAVENGER_CONFIG`, or
    /// `assets/game.toml` under [`asset_root`].
    pub fn override_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| asset_root().join(CONFIG_PATH))
    }

    /// Load the configuration from [`Self::override_path`].
    ///
    /// A missing file is not an error (compiled defaults are returned). A file
    /// that exists but cannot be read, parsed or validated is.
    pub fn load() -> GameResult<Self> {
        Self::load_from(&Self::override_path())
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> GameResult<Self> {
        if !path.exists() {
            println!("ℹ No {} found; using compiled defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|message| GameError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;
        println!("✓ Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the session cannot run with.
    ///
    /// Every spawn position is drawn from `[0, screen_width - size]`, so each
    /// entity must fit on screen; spawn intervals of zero would never reset.
    /// Fall speeds and the per-crystal speed-up keep `game_speed` positive.
    pub fn validate(&self) -> Result<(), String> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.tick_rate_hz <= 0.0 {
            return Err(format!("tick_rate_hz must be positive, got {}", self.tick_rate_hz));
        }
        if self.asteroid_spawn_interval == 0 || self.crystal_spawn_interval == 0 {
            return Err("spawn intervals must be at least one tick".to_string());
        }
        for (name, size) in [
            ("ship_size", self.ship_size),
            ("asteroid_size", self.asteroid_size),
            ("crystal_size", self.crystal_size),
        ] {
            if size <= 0.0 || size > self.screen_width {
                return Err(format!(
                    "{name} = {size} must be in (0, {}]",
                    self.screen_width
                ));
            }
        }
        if self.ship_speed < 0.0 {
            return Err(format!("ship_speed must not be negative, got {}", self.ship_speed));
        }
        // A faller that never moves never leaves the screen.
        for (name, speed) in [
            ("asteroid_base_speed", self.asteroid_base_speed),
            ("crystal_base_speed", self.crystal_base_speed),
        ] {
            if speed <= 0.0 {
                return Err(format!("{name} must be positive, got {speed}"));
            }
        }
        if self.speed_increase_rate < 0.0 {
            return Err(format!(
                "speed_increase_rate must not be negative, got {}",
                self.speed_increase_rate
            ));
        }
        if self.ship_bottom_margin < 0.0
            || self.ship_bottom_margin + self.ship_size > self.screen_height
        {
            return Err(format!(
                "ship_bottom_margin = {} leaves the ship off screen",
                self.ship_bottom_margin
            ));
        }
        Ok(())
    }
}

/// Directory Bevy's asset server resolves `asset_dir` against.
///
/// Follows the asset server's own lookup: `BEVY_ASSET_ROOT`, then
/// `CARGO_MANIFEST_DIR`, then the directory holding the executable.
pub fn asset_root() -> PathBuf {
    if let Some(root) = std::env::var_os("BEVY_ASSET_ROOT") {
        return PathBuf::from(root);
    }
    if let Some(root) = std::env::var_os("CARGO_MANIFEST_DIR") {
        return PathBuf::from(root);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_default()
}
