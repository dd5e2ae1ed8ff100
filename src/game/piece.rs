use std::fmt;
use std::str::FromStr;

/// A token a player drops into the grid, or the empty cell marker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Piece {
    #[default]
    Empty,
    X,
    O,
    J,
    S,
    C,
}

/// Returned when text does not name a playable piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown piece '{0}'")]
pub struct ParsePieceError(pub String);

impl Piece {
    /// Every piece a player may hold, in menu order.
    pub const PLAYABLE: [Piece; 5] = [Piece::X, Piece::O, Piece::J, Piece::S, Piece::C];

    /// Character used when printing the grid
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::X => 'X',
            Piece::O => 'O',
            Piece::J => 'J',
            Piece::S => 'S',
            Piece::C => 'C',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    /// Parses a playable piece from its symbol, ignoring case and surrounding
    /// whitespace. The empty marker is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Piece::PLAYABLE
            .into_iter()
            .find(|piece| trimmed.eq_ignore_ascii_case(&piece.symbol().to_string()))
            .ok_or_else(|| ParsePieceError(trimmed.to_string()))
    }
}
