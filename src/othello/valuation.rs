use crate::{Board, Move, Player};

pub type ScoreFn = fn(&Board, Option<Move>, Player, Player) -> i32;

const CORNER_WEIGHT: i32 = 10;
// earlier evolution of the heuristic valued corners at 3
const EARLY_CORNER_WEIGHT: i32 = 3;
const CORNER_ADJACENT_WEIGHT: i32 = -3;
const EDGE_WEIGHT: i32 = 5;
const TERMINAL_WEIGHT: i32 = 10;

fn piece_diff(board: &Board, perspective: Player) -> i32 {
    board.piece_count(perspective) as i32 - board.piece_count(!perspective) as i32
}

fn is_corner(x: i8, y: i8) -> bool {
    (x == 0 || x == 7) && (y == 0 || y == 7)
}

// the three cells forming each corner's X-/C-square cluster
fn is_corner_adjacent(x: i8, y: i8) -> bool {
    let near_x = x <= 1 || x >= 6;
    let near_y = y <= 1 || y >= 6;

    near_x && near_y && !is_corner(x, y)
}

fn is_edge(x: i8, y: i8) -> bool {
    x == 0 || x == 7 || y == 0 || y == 7
}

fn score_with_corner_weight(
    board: &Board,
    move_: Option<Move>,
    mover: Player,
    perspective: Player,
    corner_weight: i32,
) -> i32 {
    let before = piece_diff(board, perspective);

    let move_ = match move_ {
        Some(move_) => move_,
        // a pass changes nothing on the grid; raw delta, no positional adjustment
        None => return piece_diff(board, perspective) - before,
    };

    let mut after_board = board.clone();
    after_board.apply_move(move_, mover);

    let after = piece_diff(&after_board, perspective);
    let delta = after - before;

    // terminal outcomes dominate every positional consideration
    if after_board.is_terminal() {
        return if after >= 0 {
            delta * TERMINAL_WEIGHT
        } else {
            delta * -TERMINAL_WEIGHT
        };
    }

    let (x, y) = (move_.x(), move_.y());

    if is_corner(x, y) {
        delta * corner_weight
    } else if is_corner_adjacent(x, y) {
        // hands the opponent access to the corner
        delta * CORNER_ADJACENT_WEIGHT
    } else if is_edge(x, y) {
        delta * EDGE_WEIGHT
    } else {
        delta
    }
}

/// Heuristic value of mover playing move_ on board, seen from perspective's
/// side: material delta weighted by where the piece lands.
pub fn positional_score(board: &Board, move_: Option<Move>, mover: Player, perspective: Player) -> i32 {
    score_with_corner_weight(board, move_, mover, perspective, CORNER_WEIGHT)
}

#[allow(dead_code)]
pub fn early_positional_score(board: &Board, move_: Option<Move>, mover: Player, perspective: Player) -> i32 {
    score_with_corner_weight(board, move_, mover, perspective, EARLY_CORNER_WEIGHT)
}

/*====================================================================================================================*/
