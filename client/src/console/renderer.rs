use common::games::tictactoe::{BOARD_SIDE, GameStatus, Mark, TicTacToeGame};

const ROW_SEPARATOR: &str = "---+---+---";

/// Draws the grid. Empty cells show their 1-based input number and cells of
/// the winning line are wrapped in brackets.
pub fn render_board(game: &TicTacToeGame) -> String {
    let winning_line = game.winning_line();
    let rows: Vec<String> = game
        .board()
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let position = row * BOARD_SIDE + col;
                    let symbol = match mark {
                        Mark::Empty => char::from_digit(position as u32 + 1, 10).unwrap_or('?'),
                        mark => mark.symbol(),
                    };
                    if winning_line.is_some_and(|line| line.contains(&position)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}

pub fn render_status(game: &TicTacToeGame) -> String {
    match game.status() {
        GameStatus::AwaitingMove => format!("{}'s turn", game.current_player().name()),
        GameStatus::Won(_) => match game.winner() {
            Some(winner) => format!("{} has won!", winner.name()),
            None => "Game over".to_string(),
        },
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let game = TicTacToeGame::default();
        assert_eq!(
            render_board(&game),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
        assert_eq!(render_status(&game), "Player X's turn");
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut game = TicTacToeGame::new(Some("David"), Some("Mireia"));
        for position in [0, 3, 4, 5, 8] {
            game.propose_move(position).unwrap();
        }
        assert_eq!(
            render_board(&game),
            "[X]| 2 | 3 \n---+---+---\n O |[X]| O \n---+---+---\n 7 | 8 |[X]"
        );
        assert_eq!(render_status(&game), "David has won!");
    }

    #[test]
    fn test_draw_status() {
        let mut game = TicTacToeGame::default();
        for position in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.propose_move(position).unwrap();
        }
        assert_eq!(render_status(&game), "It's a draw!");
        assert!(!render_board(&game).contains('['));
    }
}
