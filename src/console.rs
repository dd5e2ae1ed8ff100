//! Line-based terminal driver: player setup, the turn prompt, and the
//! play-again menu. Generic over its input and output so it can be driven
//! from memory in tests.

use std::io::{BufRead, Write};

use crate::config::GameConfig;
use crate::error::{ConsoleError, MoveError};
use crate::game::{GameOutcome, GameSession, Piece, Roster};

/// Answer to the end-of-game menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    PlayAgain,
    ResetPlayers,
    Quit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Play games until the players quit or input runs out.
    pub fn run(&mut self, config: &GameConfig) -> Result<(), ConsoleError> {
        let mut roster = config.roster()?;

        loop {
            if roster.is_empty() {
                let Some(players) = self.setup_players()? else {
                    return Ok(());
                };
                roster = players;
            }

            let mut session = GameSession::new(
                config.grid.width,
                config.grid.height,
                roster.clone(),
                config.detector(),
            )?;
            if !self.play_round(&mut session)? {
                return Ok(());
            }

            match self.menu()? {
                Some(MenuChoice::PlayAgain) => {}
                Some(MenuChoice::ResetPlayers) => roster = Roster::new(),
                Some(MenuChoice::Quit) | None => return Ok(()),
            }
        }
    }

    /// Ask for players until nobody else wants to join or every piece is
    /// taken. `None` if input ends first.
    fn setup_players(&mut self) -> Result<Option<Roster>, ConsoleError> {
        let mut roster = Roster::new();

        loop {
            let number = roster.len() + 1;
            let Some(name) = self.prompt(&format!("Enter player {number}'s name:"))? else {
                return Ok(None);
            };
            let name = if name.is_empty() {
                format!("Player {number}")
            } else {
                name
            };

            let Some(piece) = self.choose_piece(&roster.available_pieces())? else {
                return Ok(None);
            };
            roster.add(name, piece)?;

            if roster.is_full() {
                writeln!(self.output, "Every game piece is taken, let's play!")?;
                return Ok(Some(roster));
            }

            let Some(answer) =
                self.prompt("Would you like to add another player?\n1: Yes\n2: No")?
            else {
                return Ok(Some(roster));
            };
            if !is_yes(&answer) {
                return Ok(Some(roster));
            }
        }
    }

    /// Pick from the numbered list of free pieces; the symbol itself is
    /// accepted too.
    fn choose_piece(&mut self, available: &[Piece]) -> Result<Option<Piece>, ConsoleError> {
        let menu: Vec<String> = available
            .iter()
            .enumerate()
            .map(|(i, piece)| format!(" {}: {}", i + 1, piece))
            .collect();
        let prompt = format!("Select a game piece:\n{}", menu.join("\n"));

        loop {
            let Some(answer) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            let chosen = match answer.parse::<usize>() {
                Ok(n) if (1..=available.len()).contains(&n) => Some(available[n - 1]),
                Ok(_) => None,
                Err(_) => answer.parse::<Piece>().ok().filter(|p| available.contains(p)),
            };
            match chosen {
                Some(piece) => return Ok(Some(piece)),
                None => writeln!(self.output, "That game piece is not available.")?,
            }
        }
    }

    /// Take turns until the game ends. `false` if input ended first.
    fn play_round(&mut self, session: &mut GameSession) -> Result<bool, ConsoleError> {
        let width = session.grid().width();

        loop {
            writeln!(self.output, "\n{}", session.grid())?;
            let player = session.current_player().clone();
            let Some(answer) = self.prompt(&format!(
                "It is {}'s turn, select a column to drop a {} game piece in:",
                player.name(),
                player.piece()
            ))?
            else {
                return Ok(false);
            };

            let column = match answer.parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    writeln!(self.output, "Please enter a column number from 1 to {width}.")?;
                    continue;
                }
            };

            match session.play(column) {
                Ok(report) => match report.outcome {
                    Some(GameOutcome::Winner(winner)) => {
                        writeln!(self.output, "\n{}", session.grid())?;
                        writeln!(
                            self.output,
                            "WE'VE GOT A WINNER!\nCongratulations to {} and their lucky game piece {}",
                            winner.name(),
                            winner.piece()
                        )?;
                        return Ok(true);
                    }
                    Some(GameOutcome::Draw) => {
                        writeln!(self.output, "\n{}", session.grid())?;
                        writeln!(self.output, "The grid is full, it's a draw!")?;
                        return Ok(true);
                    }
                    None => {}
                },
                Err(MoveError::GameOver) => return Ok(true),
                Err(err) => writeln!(self.output, "Sorry, {err}. Pick another column.")?,
            }
        }
    }

    fn menu(&mut self) -> Result<Option<MenuChoice>, ConsoleError> {
        let Some(answer) =
            self.prompt("Would you like to play again?\n1: Play again\n2: Reset players\n3: Quit")?
        else {
            return Ok(None);
        };
        let answer = answer.to_lowercase();
        let choice = if answer == "1" || answer.starts_with('y') || answer.starts_with('p') {
            MenuChoice::PlayAgain
        } else if answer == "2" || answer.starts_with('r') {
            MenuChoice::ResetPlayers
        } else {
            MenuChoice::Quit
        };
        tracing::debug!(?choice, "menu choice");
        Ok(Some(choice))
    }

    /// Print `text` and read one trimmed line, `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ConsoleError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    answer == "1" || answer.to_lowercase().starts_with('y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use std::io::Cursor;

    fn two_player_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.players = vec![
            PlayerConfig {
                name: "Ada".to_string(),
                piece: Piece::X,
            },
            PlayerConfig {
                name: "Grace".to_string(),
                piece: Piece::O,
            },
        ];
        config
    }

    fn run_console(config: &GameConfig, input: &str) -> String {
        let mut output = Vec::new();
        Console::new(Cursor::new(input.to_string()), &mut output)
            .run(config)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_vertical_win_then_quit() {
        let output = run_console(&two_player_config(), "1\n2\n1\n2\n1\n2\n1\n3\n");
        assert!(output.contains("Congratulations to Ada and their lucky game piece X"));
        assert!(output.ends_with("3: Quit\n"));
    }

    #[test]
    fn test_setup_players_from_prompts() {
        let output = run_console(&GameConfig::default(), "Ada\n1\ny\nGrace\n1\nn\n4\n");
        assert!(output.contains("Enter player 2's name:"));
        // X is gone once Ada picks it, so Grace's first choice is O
        assert!(output.contains(" 1: O\n 2: J"));
        assert!(output.contains("It is Grace's turn, select a column to drop a O game piece in:"));
    }

    #[test]
    fn test_piece_selection_by_symbol_and_retry() {
        let output = run_console(&GameConfig::default(), "Ada\n9\nS\n2\n");
        assert!(output.contains("That game piece is not available."));
        assert!(output.contains("drop a S game piece in:"));
    }

    #[test]
    fn test_blank_name_gets_default() {
        let output = run_console(&GameConfig::default(), "\nC\nno\n");
        assert!(output.contains("It is Player 1's turn"));
    }

    #[test]
    fn test_invalid_columns_reprompt() {
        let output = run_console(&two_player_config(), "0\nabc\n8\n1\n");
        assert_eq!(
            output.matches("Please enter a column number from 1 to 7.").count(),
            2
        );
        assert!(output.contains("Sorry, column is outside the grid. Pick another column."));
        assert!(output.contains("It is Grace's turn"));
    }

    #[test]
    fn test_full_column_and_draw() {
        let mut config = two_player_config();
        config.grid.width = 2;
        config.grid.height = 1;
        let output = run_console(&config, "1\n1\n2\n");
        assert!(output.contains("Sorry, column is full. Pick another column."));
        assert!(output.contains("it's a draw!"));
    }

    #[test]
    fn test_reset_players_returns_to_setup() {
        let output = run_console(&two_player_config(), "1\n2\n1\n2\n1\n2\n1\n2\nLinus\n");
        assert!(output.contains("Enter player 1's name:"));
        assert!(output.contains("Select a game piece:"));
    }

    #[test]
    fn test_play_again_keeps_players() {
        let output = run_console(&two_player_config(), "1\n2\n1\n2\n1\n2\n1\n1\n5\n");
        assert_eq!(output.matches("Congratulations to Ada").count(), 1);
        assert!(output.contains("Grace's turn, select a column to drop a O"));
        assert!(!output.contains("Enter player 1's name:"));
    }

    #[test]
    fn test_yes_plays_again_with_same_players() {
        let output = run_console(&two_player_config(), "1\n2\n1\n2\n1\n2\n1\nyes\n");
        assert_eq!(output.matches("Would you like to play again?").count(), 1);
        assert!(!output.contains("Enter player 1's name:"));
        assert!(output.ends_with("It is Ada's turn, select a column to drop a X game piece in:\n"));
    }

    #[test]
    fn test_duplicate_configured_pieces_fail() {
        let mut config = two_player_config();
        config.players[1].piece = Piece::X;
        let mut output = Vec::new();
        let result = Console::new(Cursor::new(String::new()), &mut output).run(&config);
        assert!(matches!(result, Err(ConsoleError::Setup(_))));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("1"));
        assert!(is_yes("Yes"));
        assert!(!is_yes("2"));
        assert!(!is_yes("no"));
    }
}
