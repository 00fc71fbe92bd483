// Library surface for headless/integration tests and reuse.
// The binary in main.rs only parses arguments and wires stdin/stdout.
pub mod app_dirs;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod player;
pub mod render;
pub mod round;
pub mod secret;

pub use config::{RangeConfig, Settings};
pub use error::{ConfigError, GameError};
pub use game::{GameLoop, GameOptions, GameSession, GameState};
