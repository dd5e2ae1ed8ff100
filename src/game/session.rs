use super::{Grid, Player, Roster, WinDetector};
use crate::error::{MoveError, SetupError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What happened on a single successful turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub outcome: Option<GameOutcome>,
}

/// One game in progress: the grid plus the players taking turns on it.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    roster: Roster,
    detector: WinDetector,
    turn: usize,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Create a session with an empty grid; the first player in the roster
    /// moves first.
    pub fn new(
        width: usize,
        height: usize,
        roster: Roster,
        detector: WinDetector,
    ) -> Result<Self, SetupError> {
        if roster.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        Ok(GameSession {
            grid: Grid::new(width, height),
            roster,
            detector,
            turn: 0,
            outcome: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> &Player {
        &self.roster.players()[self.turn]
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's piece, check for a result, and pass the turn
    /// on. A rejected move leaves the grid and the turn untouched.
    pub fn play(&mut self, column: usize) -> Result<TurnReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player().clone();
        let row = self.grid.drop_piece(column, player.piece())?;

        if let Some(winner) = self.detector.evaluate(&self.grid, self.roster.players()) {
            tracing::info!(winner = winner.name(), piece = %winner.piece(), "game won");
            self.outcome = Some(GameOutcome::Winner(winner.clone()));
        } else if self.grid.is_full() {
            tracing::info!("game drawn, grid is full");
            self.outcome = Some(GameOutcome::Draw);
        }

        self.turn = (self.turn + 1) % self.roster.len();

        Ok(TurnReport {
            player,
            column,
            row,
            outcome: self.outcome.clone(),
        })
    }

    /// Start another game with the same players and grid size.
    pub fn new_round(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.turn = 0;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Piece;

    fn two_players() -> Roster {
        Roster::from_assignments([("Ada", Piece::X), ("Grace", Piece::O)]).unwrap()
    }

    fn session(width: usize, height: usize) -> GameSession {
        GameSession::new(width, height, two_players(), WinDetector::default()).unwrap()
    }

    #[test]
    fn test_initial_session() {
        let session = session(7, 6);
        assert_eq!(session.current_player().name(), "Ada");
        assert!(!session.is_over());
        assert_eq!(session.grid().open_columns().len(), 7);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let result = GameSession::new(7, 6, Roster::new(), WinDetector::default());
        assert!(matches!(result, Err(SetupError::NoPlayers)));
    }

    #[test]
    fn test_turns_cycle_through_players() {
        let roster =
            Roster::from_assignments([("Ada", Piece::X), ("Grace", Piece::O), ("Linus", Piece::J)])
                .unwrap();
        let mut session = GameSession::new(7, 6, roster, WinDetector::default()).unwrap();

        let order: Vec<String> = (0..4)
            .map(|col| session.play(col).unwrap().player.name().to_string())
            .collect();
        assert_eq!(order, vec!["Ada", "Grace", "Linus", "Ada"]);
    }

    #[test]
    fn test_play_reports_landing_row() {
        let mut session = session(7, 6);
        assert_eq!(session.play(3).unwrap().row, 0);
        let report = session.play(3).unwrap();
        assert_eq!(report.row, 1);
        assert_eq!(report.player.piece(), Piece::O);
        assert_eq!(session.grid().get(3, 1), Some(Piece::O));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = session(7, 6);
        assert_eq!(session.play(9), Err(MoveError::InvalidColumn));
        assert_eq!(session.current_player().name(), "Ada");
    }

    #[test]
    fn test_win_detection() {
        let mut session = session(7, 6);

        // Ada builds a bottom row while Grace stacks on top
        for col in 0..3 {
            session.play(col).unwrap();
            session.play(col).unwrap();
        }
        let report = session.play(3).unwrap();

        let expected = GameOutcome::Winner(Player::new("Ada", Piece::X));
        assert_eq!(report.outcome, Some(expected.clone()));
        assert_eq!(session.outcome(), Some(&expected));
        assert_eq!(session.play(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_when_grid_fills() {
        let mut session = session(2, 2);
        for col in [0, 0, 1] {
            assert_eq!(session.play(col).unwrap().outcome, None);
        }
        assert_eq!(session.play(1).unwrap().outcome, Some(GameOutcome::Draw));
        assert!(session.is_over());
    }

    #[test]
    fn test_new_round_keeps_players() {
        let mut session = session(4, 4);
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(1).unwrap();
        }
        session.play(0).unwrap();
        assert!(session.is_over());

        session.new_round();
        assert!(!session.is_over());
        assert_eq!(session.grid(), &Grid::new(4, 4));
        assert_eq!(session.current_player().name(), "Ada");
        assert_eq!(session.roster().len(), 2);
    }
}
