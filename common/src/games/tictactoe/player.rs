use super::board::Board;
use super::types::{Mark, WinningLine};
use super::win_detector::find_line_for;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Blank or missing names fall back to "Player X" / "Player O".
    pub fn new(name: Option<&str>, mark: Mark) -> Self {
        debug_assert!(mark != Mark::Empty, "a player must own X or O");
        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => Self::default_name(mark),
        };
        Self { name, mark }
    }

    pub fn default_name(mark: Mark) -> String {
        format!("Player {}", mark)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_winner(&self, board: &Board) -> bool {
        self.winning_line(board).is_some()
    }

    pub fn winning_line(&self, board: &Board) -> Option<WinningLine> {
        find_line_for(board, self.mark)
    }
}
