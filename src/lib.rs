//! Space Scavenger: dodge falling asteroids and collect energy crystals.
//!
//! The game rules live in [`session`] as plain data stepped one tick at a
//! time; [`simulation`] drives them from Bevy's fixed timestep and
//! [`rendering`] presents the result.

pub mod assets;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod falling;
pub mod geometry;
pub mod graphics;
pub mod player;
pub mod rendering;
pub mod session;
pub mod simulation;
