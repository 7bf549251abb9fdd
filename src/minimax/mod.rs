mod search;

pub use search::minimax_search;
