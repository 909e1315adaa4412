use std::fmt;

use super::board::{Board, is_valid_move};
use super::bot_controller::MoveSelector;
use super::player::Player;
use super::types::{
    CELL_COUNT, GameStatus, Mark, MoveError, MoveOutcome, PlacedMark, WinningLine,
};
use crate::log;

/// Round index of the ply that fills the ninth cell.
const LAST_ROUND: usize = CELL_COUNT - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnError {
    GameOver,
    SelectorExhausted,
    AttemptsExceeded(usize),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::GameOver => write!(f, "Game is already over"),
            TurnError::SelectorExhausted => write!(f, "No more moves were proposed"),
            TurnError::AttemptsExceeded(attempts) => {
                write!(f, "No legal move after {} proposals", attempts)
            }
        }
    }
}

impl std::error::Error for TurnError {}

/// One game session: the board, both players and the turn bookkeeping.
///
/// Player X always moves first. Every accepted move advances the round counter
/// exactly once, so `round == LAST_ROUND` with no winner means the board is full.
#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    players: [Player; 2],
    current: usize,
    round: usize,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    history: Vec<PlacedMark>,
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl TicTacToeGame {
    pub fn new(name_x: Option<&str>, name_o: Option<&str>) -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(name_x, Mark::X), Player::new(name_o, Mark::O)],
            current: 0,
            round: 0,
            status: GameStatus::AwaitingMove,
            winning_line: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|player| player.mark() == mark)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => self.player(mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn history(&self) -> &[PlacedMark] {
        &self.history
    }

    pub fn propose_move(&mut self, position: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.cell_at(position)?;
        if !is_valid_move(&self.board, position) {
            return Err(MoveError::CellOccupied(position));
        }

        let player = &self.players[self.current];
        let mark = player.mark();
        self.board.set_cell(position, mark)?;
        self.history.push(PlacedMark { position, mark });
        log!("{} ({}) placed at {}, round {}", player.name(), mark, position, self.round);

        if let Some(line) = player.winning_line(&self.board) {
            self.status = GameStatus::Won(mark);
            self.winning_line = Some(line);
            log!("{} won with line {:?}", player.name(), line);
            return Ok(MoveOutcome::Won { mark, line });
        }

        if self.round == LAST_ROUND {
            debug_assert!(self.board.is_full());
            self.status = GameStatus::Draw;
            log!("Game ended in a draw");
            return Ok(MoveOutcome::Draw);
        }

        self.round += 1;
        self.switch_turn();
        Ok(MoveOutcome::Continue {
            next: self.current_player().mark(),
        })
    }

    /// Asks `selector` for candidates until one is accepted, giving up after
    /// `max_proposals` rejected or missing candidates.
    pub fn play_turn<S>(
        &mut self,
        selector: &mut S,
        max_proposals: usize,
    ) -> Result<MoveOutcome, TurnError>
    where
        S: MoveSelector + ?Sized,
    {
        if self.status.is_over() {
            return Err(TurnError::GameOver);
        }

        for _ in 0..max_proposals {
            let Some(position) = selector.propose_move(&self.board, self.current_player()) else {
                return Err(TurnError::SelectorExhausted);
            };

            match self.propose_move(position) {
                Ok(outcome) => return Ok(outcome),
                Err(error) => selector.on_rejected(position, &error),
            }
        }

        Err(TurnError::AttemptsExceeded(max_proposals))
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.current = 0;
        self.round = 0;
        self.status = GameStatus::AwaitingMove;
        self.winning_line = None;
        self.history.clear();
        log!("Game restarted, {} moves first", self.current_player().name());
    }

    pub fn new_game(&mut self, name_x: Option<&str>, name_o: Option<&str>) {
        self.players = [Player::new(name_x, Mark::X), Player::new(name_o, Mark::O)];
        log!(
            "New game: {} (X) vs {} (O)",
            self.players[0].name(),
            self.players[1].name()
        );
        self.restart();
    }

    fn switch_turn(&mut self) {
        self.current = 1 - self.current;
    }
}
