use super::{Piece, Player};
use crate::error::SetupError;

/// The players of a session, in turn order.
///
/// Each non-empty piece belongs to at most one player, so a piece found on
/// the grid always maps back to a single owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Build a roster from `(name, piece)` pairs, stopping at the first
    /// invalid assignment.
    pub fn from_assignments<I, N>(assignments: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = (N, Piece)>,
        N: Into<String>,
    {
        let mut roster = Roster::new();
        for (name, piece) in assignments {
            roster.add(name, piece)?;
        }
        Ok(roster)
    }

    /// Register a new player. The roster is unchanged on error.
    pub fn add(&mut self, name: impl Into<String>, piece: Piece) -> Result<&Player, SetupError> {
        if piece.is_empty() {
            return Err(SetupError::EmptyPiece);
        }
        if let Some(owner) = self.owner_of(piece) {
            return Err(SetupError::DuplicatePieceAssignment {
                piece,
                owner: owner.name().to_string(),
            });
        }

        self.players.push(Player::new(name, piece));
        let player = &self.players[self.players.len() - 1];
        tracing::debug!(name = player.name(), piece = %piece, "player registered");
        Ok(player)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player holding `piece`, if any
    pub fn owner_of(&self, piece: Piece) -> Option<&Player> {
        self.players.iter().find(|p| p.piece() == piece)
    }

    /// Playable pieces nobody holds yet, in menu order
    pub fn available_pieces(&self) -> Vec<Piece> {
        Piece::PLAYABLE
            .into_iter()
            .filter(|&piece| self.owner_of(piece).is_none())
            .collect()
    }

    /// True once every playable piece is taken
    pub fn is_full(&self) -> bool {
        self.available_pieces().is_empty()
    }
}
