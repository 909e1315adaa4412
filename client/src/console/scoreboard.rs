use common::games::tictactoe::{GameStatus, Mark, TicTacToeGame};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Won(Mark::Empty) | GameStatus::AwaitingMove => {}
        }
    }

    #[cfg(test)]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }

    #[cfg(test)]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn render(&self, game: &TicTacToeGame) -> String {
        let [x, o] = game.players();
        format!(
            "Score: {} {} - {} {}, draws {}",
            x.name(),
            self.x_wins,
            self.o_wins,
            o.name(),
            self.draws
        )
    }
}
