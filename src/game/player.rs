use std::fmt;

use super::Piece;

/// A named participant holding one piece for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    piece: Piece,
}

impl Player {
    /// Pieces are checked for uniqueness by [`super::Roster`], not here.
    pub fn new(name: impl Into<String>, piece: Piece) -> Self {
        Player {
            name: name.into(),
            piece,
        }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.piece)
    }
}
