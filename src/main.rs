use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod agent;
mod minimax;
mod othello;
#[cfg(test)]
mod util;

use agent::{Agent, GreedyAgent, MinimaxAgent, RandomAgent};
use othello::valuation::positional_score;
pub use othello::{Board, Move, Player};
use threadpool::ThreadPool;

fn single_ply(
    board: &mut Board,
    playing_agent: &mut dyn Agent,
    player: Player,
    last_move: Option<Move>,
    time_left: Option<Duration>,
    print: bool,
) -> Option<Move> {
    if print {
        println!("{}", board);
    }

    let start_time = Instant::now();

    let player_move = playing_agent.compute_move(last_move, time_left);

    let dur = start_time.elapsed();

    match player_move {
        Some(player_move) => {
            // the agent contract promises only legal moves; a violation here
            // is not recoverable
            assert!(
                !player_move.is_out_of_time() && board.is_legal(player_move, player),
                "Invalid move {} by {} in position\n{}",
                player_move,
                player,
                board
            );

            if print {
                println!("{} decided to make move {} after {:?}\n", player, player_move, dur);
            }

            board.apply_move(player_move, player);
        }
        None => {
            assert!(
                !board.has_legal_move(player),
                "{} passed although it has legal moves in position\n{}",
                player,
                board
            );

            if print {
                println!("{} has no legal move and passes\n", player);
            }
        }
    }

    player_move
}

fn game_loop(black_agent: &mut dyn Agent, white_agent: &mut dyn Agent, budget: Option<Duration>, print: bool) -> Board {
    use Player::{Black, White};

    let mut board = Board::new();

    // per-player countdown clocks for the whole match
    let mut black_clock = budget;
    let mut white_clock = budget;

    let mut current_player = Black;
    let mut last_move = None;

    loop {
        let turn_start = Instant::now();

        last_move = match current_player {
            Black => single_ply(&mut board, black_agent, Black, last_move, black_clock, print),
            White => single_ply(&mut board, white_agent, White, last_move, white_clock, print),
        };

        let clock = match current_player {
            Black => &mut black_clock,
            White => &mut white_clock,
        };
        if let Some(remaining) = *clock {
            *clock = Some(remaining.saturating_sub(turn_start.elapsed()));
        }

        if board.is_terminal() {
            break;
        }

        current_player = !current_player;
    }

    board
}

pub fn play_game<BlackAgent, WhiteAgent>(black_agent: BlackAgent, white_agent: WhiteAgent, budget: Option<Duration>)
where
    BlackAgent: Agent,
    WhiteAgent: Agent,
{
    let mut black_agent = black_agent;
    let mut white_agent = white_agent;

    let board = game_loop(&mut black_agent, &mut white_agent, budget, true);

    println!("\nFinal board:\n\n{}", board);

    let black_count = board.piece_count(Player::Black);
    let white_count = board.piece_count(Player::White);

    println!("Black {} - {} White", black_count, white_count);

    match black_count.cmp(&white_count) {
        std::cmp::Ordering::Less => println!("White won."),
        std::cmp::Ordering::Equal => println!("Draw."),
        std::cmp::Ordering::Greater => println!("Black won."),
    }
}

pub fn test_agents<BlackAgent, WhiteAgent>(
    black_agent_builder: &dyn Fn() -> BlackAgent,
    white_agent_builder: &dyn Fn() -> WhiteAgent,
    budget: Option<Duration>,
    num_runs: usize,
) where
    BlackAgent: Agent + Send + 'static,
    WhiteAgent: Agent + Send + 'static,
{
    let num_workers = num_cpus::get();

    let black_wins = Arc::new(AtomicU64::new(0));
    let white_wins = Arc::new(AtomicU64::new(0));
    let draws = Arc::new(AtomicU64::new(0));

    let pool = ThreadPool::new(num_workers);

    for _ in 0..num_runs {
        let mut black_agent = black_agent_builder();
        let mut white_agent = white_agent_builder();

        let black_wins = Arc::clone(&black_wins);
        let white_wins = Arc::clone(&white_wins);
        let draws = Arc::clone(&draws);

        pool.execute(move || {
            let board = game_loop(&mut black_agent, &mut white_agent, budget, false);

            let black_count = board.piece_count(Player::Black);
            let white_count = board.piece_count(Player::White);

            match black_count.cmp(&white_count) {
                std::cmp::Ordering::Less => white_wins.fetch_add(1, Ordering::Release),
                std::cmp::Ordering::Equal => draws.fetch_add(1, Ordering::Release),
                std::cmp::Ordering::Greater => black_wins.fetch_add(1, Ordering::Release),
            };
        });
    }

    pool.join();

    println!("Black wins: {}", black_wins.load(Ordering::Acquire));
    println!("Draws:      {}", draws.load(Ordering::Acquire));
    println!("White wins: {}", white_wins.load(Ordering::Acquire));
}

fn main() {
    let budget = Some(Duration::from_secs(30));

    let black_agent = MinimaxAgent::new(Player::Black, 5, positional_score);
    let white_agent = GreedyAgent::new(Player::White, positional_score);

    play_game(black_agent, white_agent, budget);

    println!("\nMinimax (Black) vs Random (White), 20 games:\n");

    test_agents(
        &|| MinimaxAgent::new(Player::Black, 4, positional_score),
        &|| RandomAgent::new(Player::White),
        budget,
        20,
    );
}
