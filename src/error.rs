use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup errors raised while resolving the number range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no settings file at {path}; run `hilo --init-config` to create one")]
    NotFound { path: PathBuf },

    #[error("could not read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings are missing the {0} bound")]
    MissingBound(&'static str),

    #[error("{key} must be an integer, got {value:?}")]
    NonNumericBound { key: &'static str, value: String },

    #[error("invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: i32, max: i32 },
}

/// Errors surfaced by a running game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl GameError {
    /// True when the operator closed the input stream.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, GameError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
