//! Startup error types.
//!
//! The tick loop itself is total and never returns an error; everything here
//! is raised while preparing the game (configuration, asset discovery and
//! asset loading) and is fatal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use space_scavenger::error::{GameError, GameResult};
//!
//! fn load() -> GameResult<()> {
//!     let config = GameConfig::load()?;
//!     verify_asset_files(&config)?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for Space Scavenger.
#[derive(Debug)]
pub enum GameError {
    /// A required sprite or sound file does not exist on disk.
    MissingAsset {
        /// Full path that was probed.
        path: PathBuf,
    },

    /// The asset server reported a failure while decoding an asset.
    AssetLoad {
        /// Asset path as passed to the asset server.
        path: String,
        /// Loader message.
        reason: String,
    },

    /// The configuration file exists but could not be read.
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or holds out-of-range values.
    ConfigParse {
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingAsset { path } => {
                write!(f, "required asset not found: {}", path.display())
            }
            GameError::AssetLoad { path, reason } => {
                write!(f, "failed to load asset '{}': {}", path, reason)
            }
            GameError::ConfigRead { path, source } => {
                write!(f, "could not read config {}: {}", path.display(), source)
            }
            GameError::ConfigParse { path, message } => {
                write!(f, "invalid config {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
