//! Tests for full matches driven through a scripted console.

use tictactoe_slots::{
    ConsoleError, Line, Mark, MatchConfig, MatchController, MatchOutcome, ScriptedConsole,
};

fn count(console: &ScriptedConsole, line: &str) -> usize {
    console.output().iter().filter(|l| *l == line).count()
}

#[test]
fn test_match_won_by_first_player() {
    let mut console = ScriptedConsole::new([
        "Alice", "Bob", // names
        "ar", // o
        "zz", "", "ar", "br", // x: unknown, empty, occupied, then legal
        "as", // o
        "bs", // x
        "at", // o wins row a
    ]);

    let controller = MatchController::setup(&mut console, &MatchConfig::default()).unwrap();
    assert_eq!(controller.current_player().name(), "Alice");
    let outcome = controller.run().unwrap();

    match outcome {
        MatchOutcome::Won { winner, line } => {
            assert_eq!(winner.name(), "Alice");
            assert_eq!(*winner.mark(), Mark::O);
            assert_eq!(line, Line::RowA);
        }
        MatchOutcome::Draw => panic!("expected a win"),
    }

    assert_eq!(console.remaining(), 0);
    assert_eq!(console.output().last().unwrap(), "Game over: Alice has won!");
    assert_eq!(count(&console, "'zz' is not a valid move. Try again"), 1);
    assert_eq!(count(&console, "invalid input, try again"), 1);
    assert_eq!(
        count(&console, "slot 'ar' has already been played, choose another one"),
        1
    );
    // Three rejected tokens re-prompted x without passing the turn.
    assert_eq!(count(&console, "Bob's turn(x): "), 5);
    assert_eq!(count(&console, "Alice's turn(o): "), 3);
}

#[test]
fn test_match_drawn() {
    let mut console = ScriptedConsole::new([
        "Ann", "Ben", "ar", "as", "at", "bs", "br", "bt", "cs", "cr", "ct",
    ]);

    let outcome = MatchController::setup(&mut console, &MatchConfig::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(outcome, MatchOutcome::Draw);
    assert_eq!(console.output().last().unwrap(), "Game Over: It's a Draw!");
    assert!(
        console
            .output()
            .iter()
            .any(|l| l.contains("c    | x | o | o |"))
    );
}

#[test]
fn test_name_prompt_retries_on_empty_input() {
    let mut console = ScriptedConsole::new(["", "Alice", "Bob"]);
    let controller = MatchController::setup(&mut console, &MatchConfig::default()).unwrap();
    assert_eq!(controller.current_player().name(), "Alice");
    drop(controller);

    assert_eq!(count(&console, "Enter player name (o): "), 2);
    assert_eq!(count(&console, "Enter player name (x): "), 1);
    assert_eq!(count(&console, "invalid input, try again"), 1);
}

#[test]
fn test_configured_names_skip_prompt() {
    let config = MatchConfig::default()
        .with_overrides(Some("Ada".into()), Some("Grace".into()), None)
        .unwrap();
    let mut console = ScriptedConsole::new(["bs", "ar", "cr", "at", "ct", "br", "cs"]);

    let outcome = MatchController::setup(&mut console, &config)
        .unwrap()
        .run()
        .unwrap();

    // o: bs cr ct cs completes row c.
    match outcome {
        MatchOutcome::Won { winner, line } => {
            assert_eq!(winner.name(), "Ada");
            assert_eq!(line, Line::RowC);
        }
        MatchOutcome::Draw => panic!("expected a win"),
    }
    assert!(
        !console
            .output()
            .iter()
            .any(|l| l.starts_with("Enter player name"))
    );
}

#[test]
fn test_closed_input_aborts_match() {
    let mut console = ScriptedConsole::new(["Alice", "Bob", "bs"]);
    let result = MatchController::setup(&mut console, &MatchConfig::default())
        .unwrap()
        .run();
    assert!(matches!(result, Err(ConsoleError::Closed)));
}

#[test]
fn test_board_shown_before_every_turn() {
    let mut console = ScriptedConsole::new(["A", "B", "ar", "br", "as", "bs", "at"]);
    MatchController::setup(&mut console, &MatchConfig::default())
        .unwrap()
        .run()
        .unwrap();

    // Five turns plus the final board.
    let boards = console
        .output()
        .iter()
        .filter(|l| l.ends_with("move syntax: <row><col> e.g ar"))
        .count();
    assert_eq!(boards, 6);
}
