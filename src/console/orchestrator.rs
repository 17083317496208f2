//! Game orchestration between the console and the engine.

use super::{Console, ConsoleError};
use crate::games::magic_squares::{GameEngine, GameStatus, Seat};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Drives one game from the first prompt to the final announcement.
pub struct Orchestrator<R, W> {
    engine: GameEngine,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator for an already configured game.
    pub fn new(engine: GameEngine, console: Console<R, W>) -> Self {
        Self { engine, console }
    }

    /// Prints the banner if asked to, then asks for every name not
    /// already known and sets up a fresh game.
    #[instrument(skip(console, names))]
    pub fn start(
        mut console: Console<R, W>,
        names: [Option<String>; 2],
        show_banner: bool,
    ) -> Result<Self, ConsoleError> {
        if show_banner {
            console.write_banner()?;
        }

        let mut labels = [String::new(), String::new()];
        for (seat, name) in Seat::iter().zip(names) {
            let label = match name {
                Some(name) => name,
                None => console.prompt_name(seat.number())?,
            };
            debug!(%seat, %label, "Player seated");
            labels[seat.index()] = label;
        }
        let [first, second] = labels;

        Ok(Self::new(GameEngine::new(first, second), console))
    }

    /// Returns the game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the orchestrator, returning the game and the console.
    pub fn into_parts(self) -> (GameEngine, Console<R, W>) {
        (self.engine, self.console)
    }

    /// Plays until somebody wins or the numbers run out.
    ///
    /// After every move the mover's grid is printed; the result is
    /// announced once the game is over.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameStatus, ConsoleError> {
        info!("Starting game");

        while let Some(seat) = self.engine.active() {
            let number = self.console.read_selection(&self.engine)?;
            self.engine.play(number)?;
            self.console.show_choices(self.engine.player(seat))?;
        }

        let status = self.engine.status();
        self.console.announce(status)?;
        info!(%status, moves = self.engine.history().len(), "Game over");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn finish(orchestrator: Orchestrator<Cursor<Vec<u8>>, Vec<u8>>) -> (GameEngine, String) {
        let (engine, console) = orchestrator.into_parts();
        (engine, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_start_prompts_for_missing_names() {
        let orchestrator =
            Orchestrator::start(console("Grace\n"), [Some("Ada".into()), None], false).unwrap();
        assert_eq!(orchestrator.engine().player(Seat::PlayerOne).label(), "Ada");
        assert_eq!(orchestrator.engine().player(Seat::PlayerTwo).label(), "Grace");

        let (_, text) = finish(orchestrator);
        assert_eq!(text, "Please enter player name for player number 2\n");
    }

    #[test]
    fn test_start_prints_banner_first() {
        let orchestrator = Orchestrator::start(console("A\nB\n"), [None, None], true).unwrap();
        let (_, text) = finish(orchestrator);
        assert!(text.starts_with(super::super::BANNER));
        assert!(text.ends_with(
            "Please enter player name for player number 1\n\
             Please enter player name for player number 2\n"
        ));
    }

    #[test]
    fn test_run_to_win() {
        let mut orchestrator =
            Orchestrator::new(GameEngine::new("Ada", "Grace"), console("2\n7\n9\n1\n4\n"));
        assert_eq!(orchestrator.run().unwrap(), GameStatus::Won(Seat::PlayerOne));

        let (engine, text) = finish(orchestrator);
        assert_eq!(engine.history().len(), 5);
        assert!(text.ends_with("2 _ _\n9 _ _\n4 _ _\nPlayer 1 wins!\n"));
        assert_eq!(text.matches("Grace, please enter a number:").count(), 2);
    }

    #[test]
    fn test_run_to_draw() {
        let mut orchestrator = Orchestrator::new(
            GameEngine::new("Ada", "Grace"),
            console("2\n7\n6\n5\n9\n1\n3\n4\n8\n"),
        );
        assert_eq!(orchestrator.run().unwrap(), GameStatus::Draw);

        let (_, text) = finish(orchestrator);
        assert!(text.ends_with("2 _ 6\n9 _ _\n_ 3 8\nThe game is a draw!\n"));
    }

    #[test]
    fn test_run_stops_on_closed_input() {
        let mut orchestrator = Orchestrator::new(GameEngine::new("Ada", "Grace"), console("5\n"));
        assert!(matches!(orchestrator.run(), Err(ConsoleError::InputClosed)));
        assert_eq!(orchestrator.engine().history().len(), 1);
    }
}
