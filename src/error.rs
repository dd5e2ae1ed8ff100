use std::path::PathBuf;

use crate::game::Piece;

/// Errors returned when a piece cannot be dropped into the grid.
///
/// None of these leave the grid modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is outside the grid")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("the empty piece cannot be dropped")]
    EmptyPiece,

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur while assembling the players of a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("piece {piece} is already taken by {owner}")]
    DuplicatePieceAssignment { piece: Piece, owner: String },

    #[error("players cannot be assigned the empty piece")]
    EmptyPiece,

    #[error("a game needs at least one player")]
    NoPlayers,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end an interactive console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("player setup failed: {0}")]
    Setup(#[from] SetupError),
}
