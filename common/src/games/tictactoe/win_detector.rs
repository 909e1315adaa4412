use super::board::Board;
use super::types::{Mark, WinningLine};

/// First winning line fully owned by `mark`, in `Board::winning_lines` order.
pub fn find_line_for(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == board.empty_value() {
        return None;
    }

    board
        .winning_lines()
        .iter()
        .copied()
        .find(|line| line.iter().all(|&position| board.cell_at(position) == Ok(mark)))
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinningLine)> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| find_line_for(board, mark).map(|line| (mark, line)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}
