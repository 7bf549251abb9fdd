use std::time::Duration;

use crate::Move;

pub trait Agent {
    /// Apply the opponent's last move to the internal board (None on the
    /// first call or when the opponent passed), then choose, apply and
    /// return a legal move for our own side. Returns None to pass.
    ///
    /// time_left is the remaining budget for the rest of the match; None
    /// means unlimited. The call must return within that budget.
    fn compute_move(&mut self, opponents_move: Option<Move>, time_left: Option<Duration>) -> Option<Move>;
}
