use std::time::Duration;

use crate::agent::Agent;
use crate::{Board, Move, Player};

/// Plays the first legal move in enumeration order. Baseline opponent.
pub struct FirstMoveAgent {
    board: Board,
    side: Player,
}

impl FirstMoveAgent {
    #[allow(dead_code)]
    pub fn new(side: Player) -> Self {
        FirstMoveAgent {
            board: Board::new(),
            side,
        }
    }
}

impl Agent for FirstMoveAgent {
    fn compute_move(&mut self, opponents_move: Option<Move>, _time_left: Option<Duration>) -> Option<Move> {
        if let Some(move_) = opponents_move {
            self.board.apply_move(move_, !self.side);
        }

        let move_ = self.board.legal_moves(self.side).first().copied();

        if let Some(move_) = move_ {
            self.board.apply_move(move_, self.side);
        }

        move_
    }
}
