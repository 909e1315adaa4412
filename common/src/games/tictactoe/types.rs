use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Three board positions that win when all hold the same mark.
pub type WinningLine = [usize; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove)
    }
}

/// Result of an accepted move, handed to whoever renders the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { next: Mark },
    Won { mark: Mark, line: WinningLine },
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedMark {
    pub position: usize,
    pub mark: Mark,
}

/// Reasons a proposed move is rejected. A rejected move never changes game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange(usize),
    CellOccupied(usize),
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(position) => {
                write!(f, "Position {} is outside the board (0..{})", position, CELL_COUNT)
            }
            MoveError::CellOccupied(position) => write!(f, "Cell {} is already marked", position),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
