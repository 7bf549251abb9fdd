use std::time::Duration;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::agent::Agent;
use crate::{Board, Move, Player};

pub struct RandomAgent {
    board: Board,
    side: Player,
}

impl RandomAgent {
    #[allow(dead_code)]
    pub fn new(side: Player) -> Self {
        RandomAgent {
            board: Board::new(),
            side,
        }
    }
}

impl Agent for RandomAgent {
    fn compute_move(&mut self, opponents_move: Option<Move>, _time_left: Option<Duration>) -> Option<Move> {
        if let Some(move_) = opponents_move {
            self.board.apply_move(move_, !self.side);
        }

        let move_ = self.board.legal_moves(self.side).choose(&mut thread_rng()).copied();

        if let Some(move_) = move_ {
            self.board.apply_move(move_, self.side);
        }

        move_
    }
}
