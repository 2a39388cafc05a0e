//! Console commands.

use std::str::FromStr;

use crate::error::CommandError;

/// One line of console input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `move C R`: flip the card at column `C`, row `R`.
    Move { col: usize, row: usize },
    /// `help`
    Help,
    /// `quit`
    Quit,
    /// `restart`: deal a new board.
    Restart,
}

/// Text printed by `help`.
pub const HELP: &str = "\
Available commands:
  help - displays this message
  move C R - flips the card in column C, row R
  restart - deals a new board
  quit - quits the game
";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(CommandError::Empty),
            ["help"] => Ok(Command::Help),
            ["quit"] => Ok(Command::Quit),
            ["restart"] => Ok(Command::Restart),
            ["move", col, row] => {
                let col = col.parse().map_err(|_| CommandError::NotAnInteger)?;
                let row = row.parse().map_err(|_| CommandError::NotAnInteger)?;
                Ok(Command::Move { col, row })
            }
            ["move", ..] => Err(CommandError::MoveArity),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!("move 2 3".parse(), Ok(Command::Move { col: 2, row: 3 }));
        assert_eq!("  move   0  1 ".parse(), Ok(Command::Move { col: 0, row: 1 }));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("help".parse(), Ok(Command::Help));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("restart".parse(), Ok(Command::Restart));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("move 1".parse::<Command>(), Err(CommandError::MoveArity));
        assert_eq!("move 1 2 3".parse::<Command>(), Err(CommandError::MoveArity));
        assert_eq!("move a 2".parse::<Command>(), Err(CommandError::NotAnInteger));
        assert_eq!("move -1 2".parse::<Command>(), Err(CommandError::NotAnInteger));
        assert_eq!(
            "jump 1 2".parse::<Command>(),
            Err(CommandError::Unknown("jump 1 2".to_string()))
        );
    }

    #[test]
    fn test_keywords_are_exact() {
        assert!(matches!("HELP".parse::<Command>(), Err(CommandError::Unknown(_))));
        assert!(matches!("quit now".parse::<Command>(), Err(CommandError::Unknown(_))));
    }
}
