use std::time::{Duration, Instant};

use crate::othello::ScoreFn;
use crate::{Board, Move, Player};

const LOG_STATS: bool = false;

// buffer kept at the end of the time budget for unwinding and bookkeeping
const BUFFER_TIME: Duration = Duration::from_millis(50);

/*====================================================================================================================*/

struct MinimaxWorker {
    score_fn: ScoreFn,
    root_side: Player,
    depth_limit: u32,
    alpha_beta_prune: bool,

    deadline: Option<Instant>,

    total_nodes_visited: u64,
    start_t: Instant,
}

impl MinimaxWorker {
    fn new(score_fn: ScoreFn, root_side: Player, depth_limit: u32, alpha_beta_prune: bool, deadline: Option<Instant>) -> Self {
        MinimaxWorker {
            score_fn,
            root_side,
            depth_limit,
            alpha_beta_prune,
            deadline,
            total_nodes_visited: 0,
            start_t: Instant::now(),
        }
    }

    fn current_nps(&self) -> f64 {
        self.total_nodes_visited as f64 / self.start_t.elapsed().as_secs_f64()
    }

    fn out_of_time(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }

    // side to move after a move has been applied: preferred unless they have
    // to pass, in which case the other side moves again; None when the
    // position is terminal
    fn next_to_move(board: &Board, preferred: Player) -> Option<Player> {
        if board.has_legal_move(preferred) {
            Some(preferred)
        } else if board.has_legal_move(!preferred) {
            Some(!preferred)
        } else {
            None
        }
    }

    // value of playing move_ on board, from root_side's perspective; at the
    // depth limit and on terminal children the evaluator scores the move
    // itself, otherwise the value comes up from the recursion. None when the
    // sub-search ran out of time.
    fn branch_value(
        &mut self,
        board: &Board,
        move_: Move,
        board_after_move: &Board,
        side: Player,
        current: u32,
        alpha: i32,
        beta: i32,
    ) -> Option<i32> {
        if current + 1 < self.depth_limit {
            if let Some(reply_side) = Self::next_to_move(board_after_move, !side) {
                let (reply, value) = self.minimax(board_after_move, reply_side, current + 1, alpha, beta);

                if reply.is_out_of_time() {
                    return None;
                }

                return Some(value);
            }
        }

        Some((self.score_fn)(board, Some(move_), side, self.root_side))
    }

    /// Chosen move at this node and the value it attained, from root_side's
    /// perspective. Propagates Move::OUT_OF_TIME through every level of the
    /// stack as soon as the deadline has passed.
    fn minimax(&mut self, board: &Board, side: Player, current: u32, alpha: i32, beta: i32) -> (Move, i32) {
        if self.out_of_time() {
            return (Move::OUT_OF_TIME, 0);
        }

        self.total_nodes_visited += 1;

        let moves = board.legal_moves(side);
        debug_assert!(!moves.is_empty(), "minimax called on a node without legal moves");

        let maximizing = side == self.root_side;

        let mut best_index = 0;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

        let mut alpha = alpha;
        let mut beta = beta;

        for (index, &move_) in moves.iter().enumerate() {
            let mut board_after_move = board.clone();
            board_after_move.apply_move(move_, side);

            let value = match self.branch_value(board, move_, &board_after_move, side, current, alpha, beta) {
                Some(value) => value,
                None => return (Move::OUT_OF_TIME, 0),
            };

            // strict comparison: ties go to the first move in enumeration order
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_index = index;
                }
                if self.alpha_beta_prune {
                    alpha = alpha.max(best_value);
                    if beta <= alpha {
                        break;
                    }
                }
            } else {
                if value < best_value {
                    best_value = value;
                    best_index = index;
                }
                if self.alpha_beta_prune {
                    beta = beta.min(best_value);
                    if beta <= alpha {
                        break;
                    }
                }
            }
        }

        (moves[best_index], best_value)
    }
}

/*====================================================================================================================*/

/// Root search: best move for side and the value it attained. None if side
/// has no legal move or depth_limit is 0 (no lookahead possible). When the
/// budget runs out mid-search the best move found before expiry is returned,
/// never the out-of-time sentinel.
pub fn search_root(
    board: &Board,
    side: Player,
    score_fn: ScoreFn,
    depth_limit: u32,
    budget: Option<Duration>,
    alpha_beta_prune: bool,
) -> Option<(Move, i32)> {
    if depth_limit == 0 {
        return None;
    }

    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return None;
    }

    let deadline = budget.map(|budget| Instant::now() + budget.saturating_sub(BUFFER_TIME));

    let mut worker = MinimaxWorker::new(score_fn, side, depth_limit, alpha_beta_prune, deadline);

    let mut best_move = moves[0];
    let mut best_value = i32::MIN;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;

    for &move_ in moves.iter() {
        if worker.out_of_time() {
            break;
        }

        let mut board_after_move = board.clone();
        board_after_move.apply_move(move_, side);

        let value = match worker.branch_value(board, move_, &board_after_move, side, 0, alpha, beta) {
            Some(value) => value,
            None => break,
        };

        if value > best_value {
            best_value = value;
            best_move = move_;
        }

        if alpha_beta_prune {
            alpha = alpha.max(best_value);
        }
    }

    if LOG_STATS {
        println!("--------------------------------------------");
        println!("* Minimax worker searched to depth {}", depth_limit);
        println!("* Best move {} had value {}", best_move, best_value);
        println!("* NPS: {:.2e}", worker.current_nps());
        println!("* alpha-beta pruning: {}", worker.alpha_beta_prune);
        println!("--------------------------------------------\n");
    }

    Some((best_move, best_value))
}

pub fn minimax_search(board: &Board, side: Player, score_fn: ScoreFn, depth_limit: u32, budget: Option<Duration>) -> Option<Move> {
    assert!(
        board.has_legal_move(side),
        "Called minimax_search on board with no legal moves"
    );

    search_root(board, side, score_fn, depth_limit, budget, true).map(|(move_, _)| move_)
}

/*====================================================================================================================*/
