//! Line-based console input and output.

use super::ConsoleError;
use crate::games::magic_squares::{
    ChoiceSet, GameEngine, GameStatus, MoveError, LAYOUT, PLACEHOLDER,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, warn};

/// Rules and layout printed when the program starts.
pub const BANNER: &str = "\
Welcome to the game of Magic Squares
***********************************
Rules:
2 players play the game.
Each player takes turns picking a number from 1-9.
No number can be chosen twice.
The first player to have 3 numbers that sum to 15 wins!
2 7 6
9 5 1
4 3 8
***********************************
";

const OUT_OF_RANGE: &str = "Please enter a choice between 1 and 9...";
const ALREADY_CHOSEN: &str = "Please make a selection that hasn't already been chosen.";

/// Console bound to a line reader and a writer.
///
/// Generic so tests can drive it with in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    placeholder: char,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            placeholder: PLACEHOLDER,
        }
    }

    /// Sets the glyph shown for unclaimed cells.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the rules and the layout.
    pub fn write_banner(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", BANNER)?;
        Ok(())
    }

    /// Asks for a player's name.
    ///
    /// A blank answer falls back to "Player N".
    #[instrument(skip(self))]
    pub fn prompt_name(&mut self, player_number: u8) -> Result<String, ConsoleError> {
        writeln!(
            self.output,
            "Please enter player name for player number {}",
            player_number
        )?;
        let line = self.read_line()?;
        let name = line.trim();
        if name.is_empty() {
            debug!(player_number, "Blank name, using default");
            Ok(format!("Player {}", player_number))
        } else {
            Ok(name.to_string())
        }
    }

    /// Prompts the active player until they enter an available number.
    ///
    /// Every rejected line costs exactly one more prompt and leaves the
    /// game untouched.
    #[instrument(skip(self, engine))]
    pub fn read_selection(&mut self, engine: &GameEngine) -> Result<u8, ConsoleError> {
        let seat = engine.active().ok_or(MoveError::GameOver)?;
        let name = engine.player(seat).label().to_string();

        loop {
            writeln!(self.output, "{}, please enter a number:", name)?;
            let line = self.read_line()?;

            let candidate = match line.trim().parse::<i64>() {
                Ok(candidate) => candidate,
                Err(_) => {
                    debug!(input = %line.trim(), "Malformed selection");
                    writeln!(self.output, "{}", OUT_OF_RANGE)?;
                    continue;
                }
            };

            match engine.check_selection(candidate) {
                Ok(number) => return Ok(number),
                Err(MoveError::Selection(err)) => {
                    debug!(%err, "Selection out of range");
                    writeln!(self.output, "{}", OUT_OF_RANGE)?;
                }
                Err(MoveError::AlreadyClaimed { number, by }) => {
                    debug!(number, %by, "Selection already claimed");
                    writeln!(self.output, "{}", ALREADY_CHOSEN)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Prints a player's claimed numbers on the layout.
    pub fn show_choices(&mut self, set: &ChoiceSet) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", set.render_with(&LAYOUT, self.placeholder))?;
        Ok(())
    }

    /// Prints the final result.
    ///
    /// Prints nothing while the game is still running.
    pub fn announce(&mut self, status: GameStatus) -> Result<(), ConsoleError> {
        if status.is_over() {
            writeln!(self.output, "{}", status)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input stream closed");
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }
}
