use std::io::{self, BufRead, Write};

use common::games::tictactoe::{Board, CELL_COUNT, MoveError, MoveSelector, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Restart,
    Quit,
}

/// Reads one move per line as a 1-based cell number and hands it to the game untouched.
///
/// Typing `r` or `q` (or closing input) stops proposing; the reason is kept in
/// `command()` for the session to act on.
pub struct ConsoleMoveSelector<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    output: &'a mut W,
    command: Option<ConsoleCommand>,
    error: Option<io::Error>,
}

impl<'a, R: BufRead, W: Write> ConsoleMoveSelector<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            input,
            output,
            command: None,
            error: None,
        }
    }

    pub fn command(&self) -> Option<ConsoleCommand> {
        self.command
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_proposal(&mut self, player: &Player) -> io::Result<Option<usize>> {
        loop {
            write!(
                self.output,
                "{} ({}), pick a cell [1-{}], r to restart, q to quit: ",
                player.name(),
                player.mark(),
                CELL_COUNT
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                self.command = Some(ConsoleCommand::Quit);
                return Ok(None);
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "q" | "quit" => {
                    self.command = Some(ConsoleCommand::Quit);
                    return Ok(None);
                }
                "r" | "restart" => {
                    self.command = Some(ConsoleCommand::Restart);
                    return Ok(None);
                }
                other => match other.parse::<usize>() {
                    // 0 wraps to an out-of-range position and is rejected by the game.
                    Ok(number) => return Ok(Some(number.wrapping_sub(1))),
                    Err(_) => writeln!(
                        self.output,
                        "Please enter a number between 1 and {}.",
                        CELL_COUNT
                    )?,
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSelector for ConsoleMoveSelector<'_, R, W> {
    fn propose_move(&mut self, _board: &Board, player: &Player) -> Option<usize> {
        match self.read_proposal(player) {
            Ok(proposal) => proposal,
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    fn on_rejected(&mut self, position: usize, error: &MoveError) {
        let message = match error {
            MoveError::OutOfRange(_) => {
                format!("Please choose a cell between 1 and {}.", CELL_COUNT)
            }
            MoveError::CellOccupied(_) => format!("Cell {} is already taken.", position + 1),
            MoveError::GameOver => "The game is already over.".to_string(),
        };
        if let Err(err) = writeln!(self.output, "{}", message) {
            self.error.get_or_insert(err);
        }
    }
}
