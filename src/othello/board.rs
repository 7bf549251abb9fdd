use std::fmt::{Debug, Display};

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

// flip the player, i.e. Black -> White and White -> Black
impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/*====================================================================================================================*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/*====================================================================================================================*/

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Move {
    x: i8,
    y: i8,
}

impl Move {
    /// Reserved out-of-grid value used to unwind the search when the time
    /// budget runs out. Must never be applied to a board.
    pub const OUT_OF_TIME: Move = Move { x: -1, y: -1 };

    pub fn new(x: i8, y: i8) -> Self {
        assert!((0..8).contains(&x) && (0..8).contains(&y), "Move ({}, {}) is off the board", x, y);

        Move { x, y }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn is_out_of_time(&self) -> bool {
        self.x < 0
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {})", self.x, self.y)
    }
}

/*====================================================================================================================*/

const DIRECTIONS: [(i8, i8); 8] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

#[derive(Clone)]
pub struct Board {
    // indexed [y][x]
    cells: [[Cell; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; 8]; 8];

        // standard diagonal opening setup
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;

        Board { cells }
    }

    fn cell(&self, x: i8, y: i8) -> Cell {
        self.cells[y as usize][x as usize]
    }

    // length of the opposing run that move_ would flip in direction (dx, dy), 0 if the run is not flanked
    fn flanked_run(&self, move_: Move, player: Player, dx: i8, dy: i8) -> u32 {
        let them = (!player).cell();

        let mut x = move_.x() + dx;
        let mut y = move_.y() + dy;
        let mut run = 0;

        while (0..8).contains(&x) && (0..8).contains(&y) {
            match self.cell(x, y) {
                Cell::Empty => return 0,
                cell if cell == them => run += 1,
                // own piece closes the run
                _ => return run,
            }

            x += dx;
            y += dy;
        }

        // ran off the edge without closing the run
        0
    }

    pub fn is_legal(&self, move_: Move, player: Player) -> bool {
        if move_.is_out_of_time() || self.cell(move_.x(), move_.y()) != Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dx, dy)| self.flanked_run(move_, player, dx, dy) > 0)
    }

    /// Place player's piece on move_ and flip every flanked run. Returns the
    /// number of opposing pieces flipped (always >= 1 for a legal move).
    pub fn apply_move(&mut self, move_: Move, player: Player) -> u32 {
        assert!(
            self.is_legal(move_, player),
            "Trying to apply illegal move {} for {} in position\n{}",
            move_,
            player,
            self
        );

        let mut total_flipped = 0;

        for (dx, dy) in DIRECTIONS {
            let run = self.flanked_run(move_, player, dx, dy);

            for i in 1..=run as i8 {
                let x = move_.x() + i * dx;
                let y = move_.y() + i * dy;
                self.cells[y as usize][x as usize] = player.cell();
            }

            total_flipped += run;
        }

        self.cells[move_.y() as usize][move_.x() as usize] = player.cell();

        total_flipped
    }

    // enumeration order is row-major with columns in the inner loop;
    // the search breaks ties by picking the first best move, so this order is part of the contract
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();

        for y in 0..8 {
            for x in 0..8 {
                let move_ = Move::new(x, y);
                if self.is_legal(move_, player) {
                    moves.push(move_);
                }
            }
        }

        moves
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        for y in 0..8 {
            for x in 0..8 {
                if self.is_legal(Move::new(x, y), player) {
                    return true;
                }
            }
        }

        false
    }

    pub fn piece_count(&self, player: Player) -> u32 {
        let own = player.cell();

        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == own)
            .count() as u32
    }

    /// The game is over when neither side has a legal move; the grid may
    /// still contain empty cells.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;

        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{}", y)?;

            for cell in row {
                match cell {
                    Cell::Empty => write!(f, " .")?,
                    Cell::Black => write!(f, " B")?,
                    Cell::White => write!(f, " W")?,
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
impl Board {
    pub(crate) fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    pub(crate) fn set_cell(&mut self, x: i8, y: i8, cell: Cell) {
        self.cells[y as usize][x as usize] = cell;
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new() {
        let board = Board::new();

        assert_eq!(board.cell(3, 3), Cell::White);
        assert_eq!(board.cell(4, 4), Cell::White);
        assert_eq!(board.cell(4, 3), Cell::Black);
        assert_eq!(board.cell(3, 4), Cell::Black);

        assert_eq!(board.piece_count(Player::Black), 2);
        assert_eq!(board.piece_count(Player::White), 2);
    }

    #[test]
    fn test_opening_legal_moves() {
        let board = Board::new();

        let moves = board.legal_moves(Player::Black);

        // row-major enumeration order
        assert_eq!(
            moves,
            vec![Move::new(3, 2), Move::new(2, 3), Move::new(5, 4), Move::new(4, 5)]
        );

        assert_eq!(board.legal_moves(Player::White).len(), 4);
    }

    #[test]
    fn test_legal_moves_matches_is_legal() {
        let mut board = Board::new();
        board.apply_move(Move::new(2, 3), Player::Black);
        board.apply_move(Move::new(2, 2), Player::White);

        for player in [Player::Black, Player::White] {
            let moves = board.legal_moves(player);

            for y in 0..8 {
                for x in 0..8 {
                    let move_ = Move::new(x, y);
                    assert_eq!(moves.contains(&move_), board.is_legal(move_, player));
                }
            }

            // each legal coordinate appears exactly once
            for (i, move_) in moves.iter().enumerate() {
                assert!(!moves[i + 1..].contains(move_));
            }
        }
    }

    #[test]
    fn test_apply_opening_move() {
        let mut board = Board::new();

        let flipped = board.apply_move(Move::new(2, 3), Player::Black);

        assert_eq!(flipped, 1);
        assert_eq!(board.cell(2, 3), Cell::Black);
        assert_eq!(board.cell(3, 3), Cell::Black);
        assert_eq!(board.piece_count(Player::Black), 4);
        assert_eq!(board.piece_count(Player::White), 1);
    }

    #[test]
    fn test_apply_move_flips_every_flanked_run() {
        // Black closing two runs at once: one to the left, one upwards
        let mut board = Board::empty();
        board.set_cell(0, 4, Cell::Black);
        board.set_cell(1, 4, Cell::White);
        board.set_cell(2, 4, Cell::White);
        board.set_cell(3, 1, Cell::Black);
        board.set_cell(3, 2, Cell::White);
        board.set_cell(3, 3, Cell::White);

        let flipped = board.apply_move(Move::new(3, 4), Player::Black);

        assert_eq!(flipped, 4);
        assert_eq!(board.piece_count(Player::Black), 7);
        assert_eq!(board.piece_count(Player::White), 0);
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn test_apply_illegal_move_panics() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 0), Player::Black);
    }

    #[test]
    fn test_unflanked_run_is_not_legal() {
        // a run that hits the edge without a closing piece must not count
        let mut board = Board::empty();
        board.set_cell(1, 0, Cell::White);
        board.set_cell(2, 0, Cell::White);
        board.set_cell(3, 0, Cell::Black);

        assert!(!board.is_legal(Move::new(0, 0), Player::White));
        assert!(board.is_legal(Move::new(4, 0), Player::White));
    }

    #[test]
    fn test_is_terminal() {
        assert!(!Board::new().is_terminal());

        // one side owns every occupied cell, nobody can flip anything
        let mut board = Board::empty();
        for y in 0..8 {
            board.set_cell(0, y, Cell::Black);
        }
        assert!(board.is_terminal());
    }

    #[test]
    fn test_clone_is_deep() {
        let board = Board::new();
        let mut clone = board.clone();

        clone.apply_move(Move::new(2, 3), Player::Black);

        assert_eq!(board.piece_count(Player::Black), 2);
        assert_eq!(clone.piece_count(Player::Black), 4);
    }

    #[test]
    fn test_out_of_time_sentinel_is_never_legal() {
        let board = Board::new();

        assert!(Move::OUT_OF_TIME.is_out_of_time());
        assert!(!board.is_legal(Move::OUT_OF_TIME, Player::Black));
        assert!(!board.is_legal(Move::OUT_OF_TIME, Player::White));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_move_new_rejects_out_of_range() {
        Move::new(8, 0);
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // play a prefix of the given cell indices as moves, skipping illegal ones
    fn board_from_moves(indices: &[u8]) -> Board {
        let mut board = Board::new();
        let mut player = Player::Black;

        for &index in indices {
            if board.is_terminal() {
                break;
            }

            if !board.has_legal_move(player) {
                player = !player;
            }

            let move_ = Move::new((index % 8) as i8, (index / 8) as i8);
            if board.is_legal(move_, player) {
                board.apply_move(move_, player);
                player = !player;
            }
        }

        board
    }

    proptest! {
        #[test]
        fn prop_legal_moves_agree_with_is_legal(indices in prop::collection::vec(0u8..64, 0..40)) {
            let board = board_from_moves(&indices);

            for player in [Player::Black, Player::White] {
                let moves = board.legal_moves(player);

                for y in 0..8 {
                    for x in 0..8 {
                        let move_ = Move::new(x, y);
                        prop_assert_eq!(moves.contains(&move_), board.is_legal(move_, player));
                    }
                }
            }
        }

        #[test]
        fn prop_apply_move_grows_mover_count(indices in prop::collection::vec(0u8..64, 0..40), x in 0i8..8, y in 0i8..8) {
            let mut board = board_from_moves(&indices);
            let move_ = Move::new(x, y);

            for player in [Player::Black, Player::White] {
                if board.is_legal(move_, player) {
                    let own_before = board.piece_count(player);
                    let their_before = board.piece_count(!player);

                    let flipped = board.apply_move(move_, player);

                    prop_assert!(flipped >= 1);
                    prop_assert_eq!(board.piece_count(player), own_before + 1 + flipped);
                    prop_assert_eq!(board.piece_count(!player), their_before - flipped);
                    break;
                }
            }
        }

        #[test]
        fn prop_piece_counts_bounded(indices in prop::collection::vec(0u8..64, 0..60)) {
            let board = board_from_moves(&indices);

            let total = board.piece_count(Player::Black) + board.piece_count(Player::White);
            prop_assert!(total <= 64);
            prop_assert!(total >= 4);
        }
    }
}
