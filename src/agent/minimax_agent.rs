use std::time::Duration;

use crate::agent::Agent;
use crate::minimax::minimax_search;
use crate::othello::ScoreFn;
use crate::{Board, Move, Player};

pub struct MinimaxAgent {
    board: Board,
    side: Player,

    depth_limit: u32,
    score_fn: ScoreFn,
}

impl MinimaxAgent {
    pub fn new(side: Player, depth_limit: u32, score_fn: ScoreFn) -> Self {
        assert!(depth_limit >= 1, "MinimaxAgent needs at least one ply of lookahead");

        MinimaxAgent {
            board: Board::new(),
            side,
            depth_limit,
            score_fn,
        }
    }

    // slice of the remaining match budget for a single move: the budget
    // divided by an estimate of our remaining turns
    fn thinking_budget(&self, time_left: Option<Duration>) -> Option<Duration> {
        let time_left = time_left?;

        let occupied = self.board.piece_count(Player::Black) + self.board.piece_count(Player::White);
        let turns_left = ((64 - occupied) / 2).max(1);

        Some(time_left / turns_left)
    }
}

impl Agent for MinimaxAgent {
    fn compute_move(&mut self, opponents_move: Option<Move>, time_left: Option<Duration>) -> Option<Move> {
        if let Some(move_) = opponents_move {
            self.board.apply_move(move_, !self.side);
        }

        if !self.board.has_legal_move(self.side) {
            return None;
        }

        let budget = self.thinking_budget(time_left);
        let move_ = minimax_search(&self.board, self.side, self.score_fn, self.depth_limit, budget);

        // the search root already resolved any timeout to the best move found
        if let Some(move_) = move_ {
            self.board.apply_move(move_, self.side);
        }

        move_
    }
}

/*====================================================================================================================*/
