pub mod board;
pub mod valuation;

pub use board::{Board, Move, Player};
pub use valuation::ScoreFn;
