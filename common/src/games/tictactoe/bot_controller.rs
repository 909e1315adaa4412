use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::board::{Board, get_available_moves};
use super::player::Player;
use super::types::{CELL_COUNT, Mark, MoveError};
use super::win_detector::check_win;
use crate::games::SessionRng;

/// Produces candidate positions for the active player.
///
/// Candidates are raw and may be illegal; the game validates every one and
/// reports rejections back through `on_rejected`. Returning `None` means the
/// selector has nothing more to offer for this turn.
pub trait MoveSelector {
    fn propose_move(&mut self, board: &Board, player: &Player) -> Option<usize>;

    fn on_rejected(&mut self, _position: usize, _error: &MoveError) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotKind {
    #[default]
    Random,
    Minimax,
}

pub fn create_selector(kind: BotKind, rng: SessionRng) -> Box<dyn MoveSelector> {
    match kind {
        BotKind::Random => Box::new(RandomMoveSelector::new(rng)),
        BotKind::Minimax => Box::new(MinimaxMoveSelector),
    }
}

/// Uniform draw over every position, occupied or not.
pub struct RandomMoveSelector {
    rng: SessionRng,
}

impl RandomMoveSelector {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for RandomMoveSelector {
    fn propose_move(&mut self, _board: &Board, _player: &Player) -> Option<usize> {
        Some(self.rng.random_range(0..CELL_COUNT))
    }
}

/// Passes externally supplied values through unchanged, in arrival order.
#[derive(Default)]
pub struct ExternalMoveSelector {
    pending: VecDeque<usize>,
    rejected: Vec<(usize, MoveError)>,
}

impl ExternalMoveSelector {
    pub fn with_moves(positions: impl IntoIterator<Item = usize>) -> Self {
        Self {
            pending: positions.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    pub fn push(&mut self, position: usize) {
        self.pending.push_back(position);
    }

    pub fn rejected(&self) -> &[(usize, MoveError)] {
        &self.rejected
    }
}

impl MoveSelector for ExternalMoveSelector {
    fn propose_move(&mut self, _board: &Board, _player: &Player) -> Option<usize> {
        self.pending.pop_front()
    }

    fn on_rejected(&mut self, position: usize, error: &MoveError) {
        self.rejected.push((position, *error));
    }
}

/// Perfect play by exhaustive alpha-beta search. Ties go to the lowest position.
pub struct MinimaxMoveSelector;

impl MoveSelector for MinimaxMoveSelector {
    fn propose_move(&mut self, board: &Board, player: &Player) -> Option<usize> {
        calculate_minimax_move(board, player.mark())
    }
}

const WIN_SCORE: i32 = 10;

pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let mut board = board.clone();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in get_available_moves(&board) {
        if board.set_cell(position, bot_mark).is_err() {
            continue;
        }
        let score = minimax(&mut board, 1, false, bot_mark, opponent_mark, i32::MIN, i32::MAX);
        let _ = board.set_cell(position, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return 0;
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for position in available_moves {
        if board.set_cell(position, mark).is_err() {
            continue;
        }
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mark, opponent_mark, alpha, beta);
        let _ = board.set_cell(position, Mark::Empty);

        if is_maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(mark: Mark) -> Player {
        Player::new(None, mark)
    }

    #[test]
    fn test_random_selector_draws_every_position() {
        let mut selector = RandomMoveSelector::new(SessionRng::new(3));
        let board = Board::new();
        let mut seen = [false; CELL_COUNT];
        for _ in 0..500 {
            let position = selector.propose_move(&board, &player(Mark::X)).unwrap();
            seen[position] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_random_selector_may_propose_occupied_cells() {
        let mut selector = RandomMoveSelector::new(SessionRng::new(11));
        let board = Board::from_marks("XOX OXO OX.");
        let proposals: Vec<usize> = (0..200)
            .filter_map(|_| selector.propose_move(&board, &player(Mark::O)))
            .collect();
        assert!(proposals.iter().any(|&p| p != 8));
    }

    #[test]
    fn test_external_selector_passes_values_through() {
        let mut selector = ExternalMoveSelector::with_moves([4, 42, 0]);
        let board = Board::new();
        let x = player(Mark::X);
        assert_eq!(selector.propose_move(&board, &x), Some(4));
        assert_eq!(selector.propose_move(&board, &x), Some(42));
        selector.push(7);
        assert_eq!(selector.propose_move(&board, &x), Some(0));
        assert_eq!(selector.propose_move(&board, &x), Some(7));
        assert_eq!(selector.propose_move(&board, &x), None);
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let board = Board::from_marks("XX. OO. ...");
        assert_eq!(calculate_minimax_move(&board, Mark::X), Some(2));
        assert_eq!(calculate_minimax_move(&board, Mark::O), Some(5));
    }

    #[test]
    fn test_minimax_blocks_opponent() {
        let board = Board::from_marks("OO. X.. ..X");
        assert_eq!(calculate_minimax_move(&board, Mark::X), Some(2));
    }

    #[test]
    fn test_minimax_on_full_board_has_no_move() {
        let board = Board::from_marks("XOX OXO OXO");
        assert_eq!(calculate_minimax_move(&board, Mark::X), None);
        assert_eq!(calculate_minimax_move(&Board::new(), Mark::Empty), None);
    }

    #[test]
    fn test_minimax_never_loses_to_random_play() {
        for seed in 0..20 {
            let mut board = Board::new();
            let mut rng = SessionRng::new(seed);
            let mut mark = Mark::X;
            while check_win(&board).is_none() && !board.is_full() {
                let position = if mark == Mark::O {
                    calculate_minimax_move(&board, Mark::O).unwrap()
                } else {
                    let moves = get_available_moves(&board);
                    moves[rng.random_range(0..moves.len())]
                };
                board.set_cell(position, mark).unwrap();
                mark = mark.opponent().unwrap();
            }
            assert_ne!(check_win(&board), Some(Mark::X), "seed {}", seed);
        }
    }
}
