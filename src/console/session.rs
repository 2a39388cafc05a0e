//! The console read-eval loop.
//!
//! Before each prompt the session prints the move count, the score, and the
//! board. Move errors go to the error stream and play continues.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use super::command::{Command, HELP};
use crate::core::{BoardConfig, GameRng};
use crate::error::{CommandError, SessionError};
use crate::events::TracingObserver;
use crate::rules::Memory;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every pair was matched.
    Won,
    /// The player quit.
    Quit,
    /// Input ran out before the game was won.
    EndOfInput,
}

/// A console game over arbitrary input and output streams.
pub struct Session<R, W, E> {
    config: BoardConfig,
    rng: GameRng,
    game: Memory,
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Deal the first board and set up the session.
    pub fn new(
        config: BoardConfig,
        mut rng: GameRng,
        input: R,
        out: W,
        err: E,
    ) -> Result<Self, SessionError> {
        let game = deal(&config, &mut rng)?;
        Ok(Self {
            config,
            rng,
            game,
            input,
            out,
            err,
        })
    }

    /// The game in progress.
    #[must_use]
    pub fn game(&self) -> &Memory {
        &self.game
    }

    /// Play until the game is won, the player quits, or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        let outcome = loop {
            self.print_status()?;
            write!(self.out, ">> ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                break Outcome::EndOfInput;
            };

            match line.parse::<Command>() {
                Ok(Command::Move { col, row }) => {
                    if let Err(e) = self.game.flip(col, row) {
                        debug!(col, row, error = %e, "move rejected");
                        writeln!(self.err, "{e}")?;
                    }
                    // A board with no cells is won before any flip lands.
                    if self.game.is_game_over() {
                        break Outcome::Won;
                    }
                }
                Ok(Command::Help) => writeln!(self.out, "{HELP}")?,
                Ok(Command::Quit) => {
                    if self.confirm_quit()? {
                        break Outcome::Quit;
                    }
                }
                Ok(Command::Restart) => self.restart()?,
                Err(e @ (CommandError::Empty | CommandError::Unknown(_))) => {
                    writeln!(self.out, "{e}")?;
                    writeln!(self.out, "{HELP}")?;
                }
                Err(e) => writeln!(self.err, "{e}")?,
            }
        };

        info!(?outcome, moves = self.game.moves(), score = self.game.score(), "session over");
        if outcome == Outcome::Won {
            self.print_status()?;
            writeln!(self.out, "You won!")?;
        } else {
            writeln!(self.out, "Better luck next time, champ.")?;
        }
        self.out.flush()?;

        Ok(outcome)
    }

    fn print_status(&mut self) -> Result<(), SessionError> {
        writeln!(self.out, "Moves: {}", self.game.moves())?;
        writeln!(self.out, "Score: {}", self.game.score())?;
        writeln!(self.out)?;
        write!(self.out, "{}", self.game)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }

    /// End of input counts as yes.
    fn confirm_quit(&mut self) -> Result<bool, SessionError> {
        write!(self.out, "Are you sure? (y/n): ")?;
        self.out.flush()?;
        Ok(self
            .read_line()?
            .map_or(true, |answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    fn restart(&mut self) -> Result<(), SessionError> {
        let mut rng = self.rng.fork();
        self.game = deal(&self.config, &mut rng)?;
        info!(seed = rng.seed(), "dealt a new board");
        Ok(())
    }
}

fn deal(config: &BoardConfig, rng: &mut GameRng) -> Result<Memory, SessionError> {
    let mut game = config.build_with(rng)?;
    game.set_on_change(TracingObserver);
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> Session<&[u8], Vec<u8>, Vec<u8>> {
        let config = BoardConfig::new().with_size(2, 1).with_symbols("A").with_seed(5);
        let rng = config.rng();
        Session::new(config, rng, input.as_bytes(), Vec::new(), Vec::new()).unwrap()
    }

    fn text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_initial_status() {
        let mut s = session("");
        assert_eq!(s.run().unwrap(), Outcome::EndOfInput);

        let out = text(&s.out);
        assert!(out.starts_with("Moves: 0\nScore: 0\n\n[ ][ ]\n\n>> "));
        assert!(out.ends_with("Better luck next time, champ.\n"));
    }

    #[test]
    fn test_win() {
        let mut s = session("move 0 0\nmove 1 0\n");
        assert_eq!(s.run().unwrap(), Outcome::Won);

        let out = text(&s.out);
        assert!(out.contains("Moves: 2\nScore: 1\n\n[A][A]\n"));
        assert!(out.ends_with("You won!\n"));
    }

    #[test]
    fn test_empty_board_is_won_on_first_move() {
        let config = BoardConfig::new().with_size(0, 2).with_seed(1);
        let rng = config.rng();
        let mut s = Session::new(config, rng, "move 0 0\nmove 0 0\n".as_bytes(), Vec::new(), Vec::new())
            .unwrap();
        assert_eq!(s.run().unwrap(), Outcome::Won);

        assert_eq!(text(&s.err), "Invalid column: 0\n");
        assert!(text(&s.out).ends_with("You won!\n"));
    }

    #[test]
    fn test_move_error_goes_to_err() {
        let mut s = session("move 0 0\nmove 0 0\nmove 9 0\n");
        s.run().unwrap();

        let err = text(&s.err);
        assert_eq!(
            err,
            "Can't flip a card that is already face up!\nInvalid column: 9\n"
        );
    }

    #[test]
    fn test_quit_confirmation() {
        let mut s = session("quit\nn\nquit\nY\n");
        assert_eq!(s.run().unwrap(), Outcome::Quit);

        let out = text(&s.out);
        assert_eq!(out.matches("Are you sure? (y/n): ").count(), 2);
    }

    #[test]
    fn test_unknown_command_prints_help() {
        let mut s = session("dance\n");
        s.run().unwrap();

        let out = text(&s.out);
        assert!(out.contains("Invalid command: dance\n"));
        assert!(out.contains(HELP));
    }

    #[test]
    fn test_restart_deals_fresh_board() {
        let mut s = session("move 0 0\nrestart\n");
        s.run().unwrap();

        assert_eq!(s.game().moves(), 0);
        assert_eq!(s.game().score(), 0);
        assert!(text(&s.out).ends_with("Moves: 0\nScore: 0\n\n[ ][ ]\n\n>> Better luck next time, champ.\n"));
    }
}
