mod board;
mod bot_controller;
mod game_state;
mod player;
mod types;
mod win_detector;

pub use board::{Board, WINNING_LINES, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotKind, ExternalMoveSelector, MinimaxMoveSelector, MoveSelector, RandomMoveSelector,
    calculate_minimax_move, create_selector,
};
pub use game_state::{TicTacToeGame, TurnError};
pub use player::Player;
pub use types::{
    BOARD_SIDE, CELL_COUNT, GameStatus, Mark, MoveError, MoveOutcome, PlacedMark, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, find_line_for};
