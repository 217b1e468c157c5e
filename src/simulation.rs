//! Session plugin: drives the [`Session`] from Bevy's fixed timestep.
//!
//! ## States
//!
//! | State      | Description                                        |
//! |------------|----------------------------------------------------|
//! | `Playing`  | Initial state; the session ticks every fixed step  |
//! | `GameOver` | Session frozen; waiting for `R`                    |
//!
//! ## Systems (registered by `SessionPlugin`)
//!
//! | System                          | Schedule                      | Purpose                          |
//! |---------------------------------|-------------------------------|----------------------------------|
//! | `init_session`                  | `Startup`                     | Build session + spawn RNG        |
//! | `keyboard_to_ship_input_system` | `FixedUpdate / in Playing`    | Sample held arrow keys           |
//! | `session_tick_system`           | `FixedUpdate / in Playing`    | Advance the session one tick     |
//! | `restart_system`                | `Update / in GameOver`        | Reset on `R`                     |
//!
//! Presentation plugins react to the [`ShipDestroyed`] and [`SessionRestarted`]
//! messages instead of polling the session.

use crate::config::GameConfig;
use crate::player::{keyboard_to_ship_input_system, ShipInput};
use crate::session::Session;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level phase of play, mirroring [`Session::game_over`].
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Ship flying; the session ticks every fixed step.
    #[default]
    Playing,
    /// An asteroid hit the ship; the overlay is shown until restart.
    GameOver,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// The one running session.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct ActiveSession(pub Session);

/// RNG used for spawn columns.
#[derive(Resource, Deref, DerefMut)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    /// Seeded from `config.seed` when set, otherwise from OS entropy.
    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// An asteroid hit the ship this tick.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDestroyed {
    /// Score at the moment of impact.
    pub score: u32,
}

/// A fresh session replaced the finished one.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRestarted;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Gameplay logic only: no window, rendering or audio.
///
/// Requires a [`GameConfig`] resource and `ButtonInput<KeyCode>` (provided by
/// `InputPlugin` in `DefaultPlugins`).
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GamePhase>()
            .init_resource::<ShipInput>()
            .add_message::<ShipDestroyed>()
            .add_message::<SessionRestarted>()
            .add_systems(Startup, init_session)
            .add_systems(
                FixedUpdate,
                (keyboard_to_ship_input_system, session_tick_system)
                    .chain()
                    .run_if(in_state(GamePhase::Playing)),
            )
            .add_systems(Update, restart_system.run_if(in_state(GamePhase::GameOver)));
    }
}

/// Startup system: build the first session and its RNG from [`GameConfig`].
pub fn init_session(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(ActiveSession(Session::new(config.clone())));
    commands.insert_resource(SpawnRng::from_config(&config));
    match config.seed {
        Some(seed) => info!("Session started (seed {seed})"),
        None => info!("Session started"),
    }
}

/// Advance the session by one fixed tick and publish what happened.
pub fn session_tick_system(
    mut session: ResMut<ActiveSession>,
    mut rng: ResMut<SpawnRng>,
    input: Res<ShipInput>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut destroyed: MessageWriter<ShipDestroyed>,
) {
    let report = session.tick(*input, &mut rng.0);

    if report.crystals_collected > 0 {
        debug!(
            "Collected {} crystal(s): score {}, game speed {:.1}",
            report.crystals_collected, session.score, session.game_speed
        );
    }

    if report.ship_destroyed {
        info!("Ship destroyed — final score {}", session.score);
        destroyed.write(ShipDestroyed {
            score: session.score,
        });
        next_phase.set(GamePhase::GameOver);
    }
}

/// Reset the session when `R` is pressed on the game-over screen.
pub fn restart_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<ActiveSession>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut restarted: MessageWriter<SessionRestarted>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    if session.restart() {
        info!("Session restarted");
        restarted.write(SessionRestarted);
        next_phase.set(GamePhase::Playing);
    }
}
