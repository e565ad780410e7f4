use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Taken(Mark),
}

impl Square {
    /// Character drawn for this square; a blank for empty squares.
    pub fn glyph(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Taken(mark) => mark.glyph(),
        }
    }

    fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Taken(mark) => Some(mark),
        }
    }
}

/// Game state derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Mark),
    Draw,
}

/// The 3x3 board plus whose turn it is.
///
/// The board only changes through [`apply_move`](Board::apply_move). Illegal
/// moves (out of range, occupied square, finished game) are ignored rather
/// than reported as errors. The outcome is never cached; every query rescans
/// the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
    turn: Mark,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with `X` to move.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; SIZE]; SIZE],
            turn: Mark::X,
        }
    }

    /// Place the current player's mark at `(row, col)` and pass the turn.
    ///
    /// Returns `false` and leaves the board untouched when the move is not
    /// legal.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        if row >= SIZE || col >= SIZE {
            return false;
        }
        if self.squares[row][col] != Square::Empty || self.outcome().is_some() {
            return false;
        }
        self.squares[row][col] = Square::Taken(self.turn);
        self.turn = self.turn.opponent();
        true
    }

    /// The mark that the next accepted move will place.
    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    /// Square at `(row, col)`. Out-of-range coordinates read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Square {
        self.squares
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    pub fn has_empty_square(&self) -> bool {
        self.squares
            .iter()
            .any(|row| row.contains(&Square::Empty))
    }

    /// True once someone has won or no empty square remains.
    pub fn is_finished(&self) -> bool {
        !self.has_empty_square() || self.outcome().is_some()
    }

    /// The winning mark, if any line holds three of the same mark.
    ///
    /// Rows are checked first, then columns, then diagonals; when several
    /// checks report a winner the last one wins. A full board without a
    /// line reports `None`, so draws are told apart with
    /// [`has_empty_square`](Board::has_empty_square) or [`status`](Board::status).
    pub fn outcome(&self) -> Option<Mark> {
        [
            check_rows(&self.squares),
            check_cols(&self.squares),
            check_diagonals(&self.squares),
        ]
        .into_iter()
        .flatten()
        .last()
    }

    pub fn status(&self) -> Status {
        match self.outcome() {
            Some(mark) => Status::Won(mark),
            None if !self.has_empty_square() => Status::Draw,
            None => Status::InProgress,
        }
    }
}

type Grid = [[Square; SIZE]; SIZE];

fn line_winner(line: [Square; SIZE]) -> Option<Mark> {
    let first = line[0].mark()?;
    line.iter()
        .all(|&sq| sq == Square::Taken(first))
        .then_some(first)
}

fn check_rows(grid: &Grid) -> Option<Mark> {
    grid.iter().find_map(|&row| line_winner(row))
}

fn check_cols(grid: &Grid) -> Option<Mark> {
    (0..SIZE).find_map(|col| line_winner([grid[0][col], grid[1][col], grid[2][col]]))
}

fn check_diagonals(grid: &Grid) -> Option<Mark> {
    let main = [grid[0][0], grid[1][1], grid[2][2]];
    let anti = [grid[0][2], grid[1][1], grid[2][0]];
    line_winner(main).or_else(|| line_winner(anti))
}
