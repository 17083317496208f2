//! End-to-end games driven through the console front end.

use magic_squares::{Console, ConsoleError, GameEngine, GameStatus, Orchestrator, Seat, BANNER};
use std::io::Cursor;

type TestOrchestrator = Orchestrator<Cursor<Vec<u8>>, Vec<u8>>;

fn start(input: &str, names: [Option<String>; 2], show_banner: bool) -> TestOrchestrator {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    Orchestrator::start(console, names, show_banner).expect("Setup succeeds")
}

fn transcript(orchestrator: TestOrchestrator) -> (GameEngine, String) {
    let (engine, console) = orchestrator.into_parts();
    (engine, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_full_session_with_banner_and_names() {
    let mut orchestrator = start("Ada\nGrace\n2\n7\n9\n1\n4\n", [None, None], true);

    assert_eq!(orchestrator.run().unwrap(), GameStatus::Won(Seat::PlayerOne));

    let (_, text) = transcript(orchestrator);
    let expected = format!(
        "{BANNER}\n\
         Please enter player name for player number 1\n\
         Please enter player name for player number 2\n\
         Ada, please enter a number:\n\
         2 _ _\n_ _ _\n_ _ _\n\
         Grace, please enter a number:\n\
         _ 7 _\n_ _ _\n_ _ _\n\
         Ada, please enter a number:\n\
         2 _ _\n9 _ _\n_ _ _\n\
         Grace, please enter a number:\n\
         _ 7 _\n_ _ 1\n_ _ _\n\
         Ada, please enter a number:\n\
         2 _ _\n9 _ _\n4 _ _\n\
         Player 1 wins!\n"
    );
    assert_eq!(text, expected);
}

#[test]
fn test_bad_input_costs_one_prompt_each() {
    let names = [Some("Ada".to_string()), Some("Grace".to_string())];
    // Grace tries a taken number, then nonsense, then a number out of range.
    let mut orchestrator = start("5\n5\nabc\n42\n8\n", names, false);

    assert!(matches!(orchestrator.run(), Err(ConsoleError::InputClosed)));

    let (engine, text) = transcript(orchestrator);
    assert_eq!(engine.player(Seat::PlayerOne).numbers(), vec![5]);
    assert_eq!(engine.player(Seat::PlayerTwo).numbers(), vec![8]);
    assert_eq!(text.matches("Grace, please enter a number:").count(), 4);
    assert_eq!(
        text.matches("Please make a selection that hasn't already been chosen.")
            .count(),
        1
    );
    assert_eq!(
        text.matches("Please enter a choice between 1 and 9...").count(),
        2
    );
}

#[test]
fn test_player_two_win_announced() {
    let names = [Some("Ada".to_string()), Some("Grace".to_string())];
    let mut orchestrator = start("1\n2\n3\n9\n7\n4\n", names, false);

    assert_eq!(orchestrator.run().unwrap(), GameStatus::Won(Seat::PlayerTwo));

    let (_, text) = transcript(orchestrator);
    assert!(text.ends_with("2 _ _\n9 _ _\n4 _ _\nPlayer 2 wins!\n"));
}

#[test]
fn test_draw_announced() {
    let names = [Some("Ada".to_string()), Some("Grace".to_string())];
    let mut orchestrator = start("2\n7\n6\n5\n9\n1\n3\n4\n8\n", names, false);

    assert_eq!(orchestrator.run().unwrap(), GameStatus::Draw);

    let (engine, text) = transcript(orchestrator);
    assert_eq!(engine.history().len(), 9);
    assert!(text.ends_with("The game is a draw!\n"));
}
