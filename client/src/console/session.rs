use std::io::{self, BufRead, Write};

use common::games::tictactoe::{Mark, MoveSelector, TicTacToeGame, TurnError};
use common::log;

use super::human_input::{ConsoleCommand, ConsoleMoveSelector};
use super::renderer::{render_board, render_status};
use super::scoreboard::Scoreboard;
use crate::config::MAX_NAME_LENGTH;

/// Upper bound on rejected bot proposals before the turn is abandoned.
pub const MAX_BOT_PROPOSALS: usize = 10_000;

pub enum Seat {
    Human,
    Bot(Box<dyn MoveSelector>),
}

enum GameEnd {
    Finished,
    Restart,
    Quit,
}

enum AfterGame {
    PlayAgain,
    NewPlayers,
    Quit,
}

/// Drives games on a text console until the user quits.
pub struct ConsoleSession<R: BufRead, W: Write> {
    game: TicTacToeGame,
    seats: [Seat; 2],
    scoreboard: Scoreboard,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// `seats[0]` plays X, `seats[1]` plays O.
    pub fn new(game: TicTacToeGame, seats: [Seat; 2], input: R, output: W) -> Self {
        Self {
            game,
            seats,
            scoreboard: Scoreboard::default(),
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }

    #[cfg(test)]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.play_game()? {
                GameEnd::Finished => {}
                GameEnd::Restart => {
                    self.game.restart();
                    continue;
                }
                GameEnd::Quit => return Ok(()),
            }

            self.scoreboard.record(self.game.status());
            writeln!(self.output, "{}", self.scoreboard.render(&self.game))?;

            match self.prompt_after_game()? {
                AfterGame::PlayAgain => self.game.restart(),
                AfterGame::NewPlayers => {
                    let name_x = self.prompt_name(Mark::X)?;
                    let name_o = self.prompt_name(Mark::O)?;
                    self.game.new_game(name_x.as_deref(), name_o.as_deref());
                    self.scoreboard.reset();
                }
                AfterGame::Quit => return Ok(()),
            }
        }
    }

    fn play_game(&mut self) -> io::Result<GameEnd> {
        self.render()?;

        while !self.game.is_over() {
            let seat_index = match self.game.current_player().mark() {
                Mark::O => 1,
                _ => 0,
            };

            let result = match &mut self.seats[seat_index] {
                Seat::Human => {
                    let mut selector = ConsoleMoveSelector::new(&mut self.input, &mut self.output);
                    let result = self.game.play_turn(&mut selector, usize::MAX);
                    if let Some(err) = selector.take_error() {
                        return Err(err);
                    }
                    if let Err(TurnError::SelectorExhausted) = result {
                        return Ok(match selector.command() {
                            Some(ConsoleCommand::Restart) => GameEnd::Restart,
                            Some(ConsoleCommand::Quit) | None => GameEnd::Quit,
                        });
                    }
                    result
                }
                Seat::Bot(selector) => {
                    let result = self.game.play_turn(selector.as_mut(), MAX_BOT_PROPOSALS);
                    if result.is_ok()
                        && let Some(placed) = self.game.history().last()
                    {
                        let name = self.game.player(placed.mark).map(|p| p.name()).unwrap_or("Bot");
                        writeln!(self.output, "{} picks {}", name, placed.position + 1)?;
                    }
                    result
                }
            };

            if let Err(err) = result {
                log!("Turn abandoned: {}", err);
                return Err(io::Error::other(err));
            }
            self.render()?;
        }

        Ok(GameEnd::Finished)
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_board(&self.game))?;
        writeln!(self.output, "{}", render_status(&self.game))?;
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_after_game(&mut self) -> io::Result<AfterGame> {
        loop {
            write!(self.output, "[p]lay again, [n]ew players, [q]uit: ")?;
            let Some(answer) = self.read_line()? else {
                return Ok(AfterGame::Quit);
            };
            match answer.to_ascii_lowercase().as_str() {
                "p" | "play" | "r" | "restart" => return Ok(AfterGame::PlayAgain),
                "n" | "new" => return Ok(AfterGame::NewPlayers),
                "q" | "quit" => return Ok(AfterGame::Quit),
                _ => writeln!(self.output, "Please answer p, n or q.")?,
            }
        }
    }

    fn prompt_name(&mut self, mark: Mark) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "Name for player {} (blank for default): ", mark)?;
            let Some(name) = self.read_line()? else {
                return Ok(None);
            };
            if name.chars().count() <= MAX_NAME_LENGTH {
                return Ok(Some(name));
            }
            writeln!(self.output, "Names can be at most {} characters.", MAX_NAME_LENGTH)?;
        }
    }
}
