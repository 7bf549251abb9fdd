use std::time::Duration;

use crate::agent::Agent;
use crate::othello::ScoreFn;
use crate::{Board, Move, Player};

/// One-ply lookahead: plays the highest-scoring move under the valuation
/// function, first move winning ties.
pub struct GreedyAgent {
    board: Board,
    side: Player,

    score_fn: ScoreFn,
}

impl GreedyAgent {
    #[allow(dead_code)]
    pub fn new(side: Player, score_fn: ScoreFn) -> Self {
        GreedyAgent {
            board: Board::new(),
            side,
            score_fn,
        }
    }
}

impl Agent for GreedyAgent {
    fn compute_move(&mut self, opponents_move: Option<Move>, _time_left: Option<Duration>) -> Option<Move> {
        if let Some(move_) = opponents_move {
            self.board.apply_move(move_, !self.side);
        }

        let mut best: Option<(Move, i32)> = None;

        for move_ in self.board.legal_moves(self.side) {
            let value = (self.score_fn)(&self.board, Some(move_), self.side, self.side);

            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((move_, value)),
            }
        }

        let move_ = best.map(|(move_, _)| move_);

        if let Some(move_) = move_ {
            self.board.apply_move(move_, self.side);
        }

        move_
    }
}
