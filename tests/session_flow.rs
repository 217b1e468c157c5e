//! Headless tests for [`SessionPlugin`]: fixed ticks, phases and restart.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no audio —
//! and pause virtual time so fixed steps only run when a test asks for them.
//!
//! Covered scenarios:
//! 1. The app starts `Playing` with a fresh session.
//! 2. Fixed ticks spawn asteroids and crystals on their cadence.
//! 3. Held arrow keys steer the ship.
//! 4. An asteroid hit moves to `GameOver` and publishes `ShipDestroyed` once.
//! 5. `R` restarts only from `GameOver`.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use space_scavenger::config::GameConfig;
use space_scavenger::falling::FallerKind;
use space_scavenger::session::Session;
use space_scavenger::simulation::{ActiveSession, GamePhase, SessionPlugin, ShipDestroyed};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Scores carried by every `ShipDestroyed` message seen so far.
#[derive(Resource, Default)]
struct DestroyedLog(Vec<u32>);

fn record_destroyed(mut reader: MessageReader<ShipDestroyed>, mut log: ResMut<DestroyedLog>) {
    log.0.extend(reader.read().map(|m| m.score));
}

/// Defaults with a fixed seed and random spawning pushed out of reach.
fn quiet_config() -> GameConfig {
    GameConfig {
        asteroid_spawn_interval: 100_000,
        crystal_spawn_interval: 100_000,
        seed: Some(11),
        ..GameConfig::default()
    }
}

/// Build a headless app with the session plugin and run `Startup`.
fn app_with_session(config: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    // Fixed steps are driven by hand; wall-clock time must not add any.
    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(config);
    app.add_plugins(SessionPlugin);
    app.init_resource::<DestroyedLog>();
    app.add_systems(Update, record_destroyed);
    app.update();
    app
}

/// Run `n` fixed ticks, then one regular frame so state changes apply.
fn run_ticks(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
    app.update();
}

fn phase(app: &App) -> GamePhase {
    *app.world().resource::<State<GamePhase>>().get()
}

fn session(app: &App) -> &Session {
    &app.world().resource::<ActiveSession>().0
}

fn keys(app: &mut App) -> Mut<'_, ButtonInput<KeyCode>> {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>()
}

/// Drop an asteroid straight onto the ship and tick until it lands.
fn crash(app: &mut App) {
    let mut active = app.world_mut().resource_mut::<ActiveSession>();
    let x = active.ship.hitbox.x;
    active.drop_faller_at(FallerKind::Asteroid, x);
    run_ticks(app, 181);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn starts_playing_with_a_fresh_session() {
    let config = quiet_config();
    let app = app_with_session(config.clone());

    assert_eq!(phase(&app), GamePhase::Playing);
    assert_eq!(*session(&app), Session::new(config));
}

#[test]
fn fixed_ticks_follow_spawn_cadence() {
    let config = GameConfig {
        seed: Some(3),
        ..GameConfig::default()
    };
    let mut app = app_with_session(config);

    run_ticks(&mut app, 119);
    assert_eq!(session(&app).asteroids.len(), 1);
    assert!(session(&app).crystals.is_empty());

    run_ticks(&mut app, 1);
    assert_eq!(session(&app).asteroids.len(), 2);
    assert_eq!(session(&app).crystals.len(), 1);
}

#[test]
fn regular_frames_do_not_tick_the_session() {
    let config = quiet_config();
    let mut app = app_with_session(config.clone());
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(*session(&app), Session::new(config));
}

#[test]
fn held_left_arrow_steers_the_ship() {
    let mut app = app_with_session(quiet_config());
    keys(&mut app).press(KeyCode::ArrowLeft);

    run_ticks(&mut app, 10);
    assert_eq!(session(&app).ship.hitbox.x, 325.0);

    keys(&mut app).release(KeyCode::ArrowLeft);
    run_ticks(&mut app, 10);
    assert_eq!(session(&app).ship.hitbox.x, 325.0);
}

#[test]
fn asteroid_hit_enters_game_over_once() {
    let mut app = app_with_session(quiet_config());
    crash(&mut app);

    assert_eq!(phase(&app), GamePhase::GameOver);
    assert!(session(&app).game_over);
    assert_eq!(app.world().resource::<DestroyedLog>().0, vec![0]);

    // Fixed steps no longer run their systems while the game is over.
    let frozen = session(&app).clone();
    keys(&mut app).press(KeyCode::ArrowRight);
    run_ticks(&mut app, 60);
    assert_eq!(*session(&app), frozen);
    assert_eq!(app.world().resource::<DestroyedLog>().0, vec![0]);
}

#[test]
fn restart_key_is_ignored_while_playing() {
    let mut app = app_with_session(quiet_config());
    run_ticks(&mut app, 30);
    let before = session(&app).clone();

    keys(&mut app).press(KeyCode::KeyR);
    app.update();

    assert_eq!(phase(&app), GamePhase::Playing);
    assert_eq!(*session(&app), before);
}

#[test]
fn restart_key_resets_after_game_over() {
    let config = quiet_config();
    let mut app = app_with_session(config.clone());
    crash(&mut app);
    assert_eq!(phase(&app), GamePhase::GameOver);

    keys(&mut app).press(KeyCode::KeyR);
    app.update(); // restart_system resets the session and requests Playing
    keys(&mut app).clear();
    app.update(); // StateTransition applies Playing

    assert_eq!(phase(&app), GamePhase::Playing);
    assert_eq!(*session(&app), Session::new(config));

    // The new session ticks again.
    run_ticks(&mut app, 5);
    assert_eq!(session(&app).asteroid_spawn_counter, 5);
}
