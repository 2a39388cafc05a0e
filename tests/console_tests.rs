//! Console session transcripts.
//!
//! These tests run whole `Session`s over in-memory streams and check what a
//! player would see on stdout and stderr.

use memory_game::console::HELP;
use memory_game::{BoardConfig, GameRng, Grid, Memory, Outcome, Session};

struct Transcript {
    outcome: Outcome,
    out: String,
    err: String,
    moves: usize,
    grid: Grid,
}

fn play(config: BoardConfig, input: &str) -> Transcript {
    let rng = config.rng();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let (outcome, moves, grid) = {
        let mut session = Session::new(config, rng, input.as_bytes(), &mut out, &mut err).unwrap();
        let outcome = session.run().unwrap();
        (outcome, session.game().moves(), session.game().grid().clone())
    };
    Transcript {
        outcome,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        moves,
        grid,
    }
}

/// `move` commands that pair up every card, computed from the seeded layout.
fn winning_moves(config: &BoardConfig) -> String {
    let game: Memory = config.build_with(&mut config.rng()).unwrap();
    let mut by_symbol: Vec<(char, usize, usize)> = game
        .cells()
        .filter_map(|(pos, cell)| cell.symbol().map(|s| (s, pos.col, pos.row)))
        .collect();
    by_symbol.sort();
    by_symbol
        .iter()
        .map(|(_, col, row)| format!("move {col} {row}\n"))
        .collect()
}

#[test]
fn test_full_game_transcript() {
    let config = BoardConfig::new().with_size(4, 2).with_seed(99);
    let input = winning_moves(&config);

    let t = play(config, &input);

    assert_eq!(t.outcome, Outcome::Won);
    assert_eq!(t.moves, 8);
    assert!(t.err.is_empty());
    assert!(t.out.contains("Moves: 8\nScore: 4\n"));
    assert!(t.out.ends_with("You won!\n"));
}

#[test]
fn test_status_before_every_prompt() {
    let config = BoardConfig::new().with_size(2, 2).with_symbols("XY").with_seed(1);
    let t = play(config, "help\nhelp\n");

    assert_eq!(t.out.matches(">> ").count(), 3);
    assert_eq!(t.out.matches("Moves: 0\nScore: 0\n\n[ ][ ]\n[ ][ ]\n\n>> ").count(), 3);
    assert_eq!(t.out.matches(HELP).count(), 2);
    assert_eq!(t.outcome, Outcome::EndOfInput);
}

#[test]
fn test_bad_input_is_reported_and_play_continues() {
    let config = BoardConfig::new().with_size(2, 1).with_symbols("A").with_seed(1);
    let t = play(config, "move\nmove x 0\nmove 0 7\n\nmove 0 0\nmove 1 0\n");

    assert_eq!(t.outcome, Outcome::Won);
    assert_eq!(
        t.err,
        "Invalid move! Please try again.\n\
         Column and row must be non-negative integers.\n\
         Invalid row: 7\n"
    );
    assert!(t.out.contains("Please enter a command.\n"));
}

#[test]
fn test_quit_declined_then_confirmed() {
    let config = BoardConfig::new().with_size(2, 1).with_symbols("A").with_seed(1);
    let t = play(config, "quit\nno\nmove 0 0\nquit\ny\n");

    assert_eq!(t.outcome, Outcome::Quit);
    assert_eq!(t.moves, 1);
    assert!(t.out.ends_with("Are you sure? (y/n): Better luck next time, champ.\n"));
}

#[test]
fn test_restart_uses_forked_rng() {
    let config = BoardConfig::new().with_size(4, 4).with_seed(21);
    let first = config.build_with(&mut config.rng()).unwrap();

    let mut rng = config.rng();
    let _ = config.build_with(&mut rng).unwrap();
    let second = config.build_with(&mut rng.fork()).unwrap();

    let t = play(config, "move 0 0\nrestart\n");
    assert_eq!(t.moves, 0);
    assert!(t.out.contains("Moves: 1\n"));
    // The restarted board comes from the fork, not the original seed.
    assert_eq!(t.grid, *second.grid());
    assert_ne!(t.grid, *first.grid());
}

#[test]
fn test_session_rejects_bad_config() {
    let config = BoardConfig::new().with_size(3, 3).with_seed(1);
    let rng = GameRng::new(1);
    let result = Session::new(config, rng, "".as_bytes(), Vec::<u8>::new(), Vec::<u8>::new());
    assert!(result.is_err());
}

#[test]
fn test_empty_board_ends_in_a_win() {
    let config = BoardConfig::new().with_size(0, 2).with_seed(1);
    let t = play(config, "move 0 0\nmove 0 0\n");

    assert_eq!(t.outcome, Outcome::Won);
    assert_eq!(t.moves, 0);
    assert_eq!(t.err, "Invalid column: 0\n");
    assert!(t.out.ends_with("You won!\n"));
}
