use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Board, Player};

/// Advance board by up to num_moves random legal plies (passing where one
/// side is stuck) and return the side to move next. Seeded so test positions
/// are reproducible.
pub fn advance_random(board: &mut Board, num_moves: usize, seed: u64) -> Player {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut player = Player::Black;

    for _ in 0..num_moves {
        if board.is_terminal() {
            break;
        }

        if !board.has_legal_move(player) {
            player = !player;
        }

        let move_ = *board.legal_moves(player).choose(&mut rng).unwrap();
        board.apply_move(move_, player);

        player = !player;
    }

    player
}
