mod base_agent;
mod first_move_agent;
mod greedy_agent;
mod minimax_agent;
mod random_agent;

pub use base_agent::Agent;
pub use first_move_agent::FirstMoveAgent;
pub use greedy_agent::GreedyAgent;
pub use minimax_agent::MinimaxAgent;
pub use random_agent::RandomAgent;
