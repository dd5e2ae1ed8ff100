//! Core game logic: pieces, the drop grid, win detection, players, and the
//! turn-taking session that ties them together.

mod grid;
mod piece;
mod player;
mod roster;
mod session;
mod win;

pub use grid::Grid;
pub use piece::{ParsePieceError, Piece};
pub use player::Player;
pub use roster::Roster;
pub use session::{GameOutcome, GameSession, TurnReport};
pub use win::{Axis, Connection, WinDetector, DEFAULT_RUN_LENGTH};
