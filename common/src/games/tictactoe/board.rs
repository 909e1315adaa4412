use super::types::{CELL_COUNT, Mark, MoveError, WinningLine};

pub const WINNING_LINES: [WinningLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Row-major 3x3 grid. Positions are `0..CELL_COUNT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_marks(marks: &str) -> Self {
        let mut board = Self::new();
        for (position, symbol) in marks.chars().filter(|c| !c.is_whitespace()).enumerate() {
            board.cells[position] = match symbol {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        board
    }

    pub fn empty_value(&self) -> Mark {
        Mark::Empty
    }

    pub fn cell_at(&self, position: usize) -> Result<Mark, MoveError> {
        self.cells
            .get(position)
            .copied()
            .ok_or(MoveError::OutOfRange(position))
    }

    /// Overwrites a cell without any legality check beyond bounds.
    pub fn set_cell(&mut self, position: usize, value: Mark) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(MoveError::OutOfRange(position))?;
        *cell = value;
        Ok(())
    }

    pub fn positions_with_mark(&self, mark: Mark) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == mark)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn winning_lines(&self) -> &'static [WinningLine] {
        &WINNING_LINES
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board.positions_with_mark(board.empty_value())
}

pub fn is_valid_move(board: &Board, position: usize) -> bool {
    board.cell_at(position) == Ok(board.empty_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(board.cell_at(usize::MAX), Err(MoveError::OutOfRange(usize::MAX)));
    }

    #[test]
    fn test_set_cell_overwrites_without_legality_check() {
        let mut board = Board::new();
        board.set_cell(4, Mark::X).unwrap();
        board.set_cell(4, Mark::O).unwrap();
        assert_eq!(board.cell_at(4), Ok(Mark::O));
        assert_eq!(board.set_cell(12, Mark::X), Err(MoveError::OutOfRange(12)));
    }

    #[test]
    fn test_positions_with_mark() {
        let board = Board::from_marks("X.O .X. O.X");
        assert_eq!(board.positions_with_mark(Mark::X), vec![0, 4, 8]);
        assert_eq!(board.positions_with_mark(Mark::O), vec![2, 6]);
        assert_eq!(board.positions_with_mark(Mark::Empty), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_winning_lines_cover_rows_columns_and_diagonals() {
        let board = Board::new();
        let lines = board.winning_lines();
        assert_eq!(lines.len(), 8);
        for position in 0..9 {
            assert!(lines.iter().any(|line| line.contains(&position)));
        }
        assert_eq!(lines.iter().filter(|line| line.contains(&4)).count(), 4);
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::from_marks("XOX OXO OXO");
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::from_marks("X.. ... ...");
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 9));
    }
}
