//! Prompts with retry loops over any line-based input and output.
//!
//! Each `ask_*` method keeps re-prompting until it reads an acceptable
//! answer. End of input is an error since nothing can be re-asked.

use crate::ShellError;
use crate::render::joinor;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use strictly_match::{Board, Marker, Position, Side};
use tracing::{debug, instrument, trace};

/// Line-oriented terminal.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; `clear_screen` controls [`Console::clear`].
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the console, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<(), ShellError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Clears the screen, if enabled.
    pub fn clear(&mut self) -> Result<(), ShellError> {
        if self.clear_screen {
            crossterm::execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ShellError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Read input");
        Ok(line)
    }

    /// Asks for a single-character marker not equal to `taken`.
    #[instrument(skip(self, question))]
    pub fn ask_marker(
        &mut self,
        question: &str,
        taken: Option<Marker>,
    ) -> Result<Marker, ShellError> {
        loop {
            self.say(question)?;
            let answer = self.read_line()?;
            match answer.parse::<Marker>() {
                Ok(marker) if Some(marker) != taken => return Ok(marker),
                Ok(_) | Err(_) => {
                    debug!(%answer, "Rejected marker");
                    self.say("That is not a possible choice. Please try again.")?;
                }
            }
        }
    }

    /// Asks for a non-blank name not equal to `taken`.
    #[instrument(skip(self, question))]
    pub fn ask_name(&mut self, question: &str, taken: Option<&str>) -> Result<String, ShellError> {
        loop {
            self.say(question)?;
            let answer = self.read_line()?;
            let name = answer.trim();
            if !name.is_empty() && Some(name) != taken {
                return Ok(name.to_string());
            }
            debug!(%answer, "Rejected name");
            self.say("That is not valid. Please try again.")?;
        }
    }

    /// Asks which side moves first, by typing one of the two names.
    #[instrument(skip(self))]
    pub fn ask_first_mover(
        &mut self,
        human_name: &str,
        opponent_name: &str,
    ) -> Result<Side, ShellError> {
        loop {
            self.say(format!(
                "Pick who you would like to go first {}/{}:",
                human_name, opponent_name
            ))?;
            let answer = self.read_line()?;
            match answer.trim() {
                name if name == human_name => return Ok(Side::Human),
                name if name == opponent_name => return Ok(Side::Opponent),
                _ => self.say("Your choice is invalid. Please try again.")?,
            }
        }
    }

    /// Asks for one of the board's open squares.
    #[instrument(skip(self, board))]
    pub fn ask_move(&mut self, board: &Board) -> Result<Position, ShellError> {
        let open: Vec<Position> = board.unmarked_positions().collect();
        self.say(format!("Choose a square ({}):", joinor(&open, ",", "or")))?;
        loop {
            let answer = self.read_line()?;
            match answer.parse::<Position>() {
                Ok(pos) if board.is_unmarked(pos) => return Ok(pos),
                _ => self.say("Sorry, that's not a valid choice.")?,
            }
        }
    }

    /// Asks whether to keep playing after a round.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self, winning_score: u32) -> Result<bool, ShellError> {
        loop {
            self.say(format!(
                "You have not reached the winning score of {} yet.",
                winning_score
            ))?;
            self.say("Would you like to continue playing? (y/n)")?;
            let answer = self.read_line()?;
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Sorry, must be y or n.")?,
            }
        }
    }
}
