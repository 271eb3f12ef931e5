use super::*;
use crate::COLS;
use crate::ROWS;

/// 6×7 connect-four grid. Row 0 is the top row.
///
/// Discs fall to the lowest empty row of their column, so every column
/// holds a contiguous run of discs starting from the bottom.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }
    /// A column accepts a disc while its top cell is empty.
    pub fn is_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_empty()
    }
    /// Columns that still accept a disc, in ascending order.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&c| self.is_playable(c)).collect()
    }
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|c| !self.is_playable(c))
    }
    /// Drops a disc for `seat` into `col`, returning the row it landed in.
    pub fn place(&mut self, col: usize, seat: Seat) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange(col as i64));
        }
        let row = (0..ROWS)
            .rev()
            .find(|&r| self.cells[r][col].is_empty())
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = Cell::from(seat);
        Ok(row)
    }
    /// Copy of this board with `seat`'s disc dropped into `col`.
    pub fn apply(&self, col: usize, seat: Seat) -> Result<Self, MoveError> {
        let mut next = *self;
        next.place(col, seat)?;
        Ok(next)
    }
    /// Number of discs on the board.
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }
    /// Number of `seat`'s discs in column `col`.
    pub fn discs_in_column(&self, col: usize, seat: Seat) -> usize {
        self.cells
            .iter()
            .filter(|row| row[col] == Cell::from(seat))
            .count()
    }
    /// Wire encoding of the grid, top row first.
    pub fn rows(&self) -> [[u8; COLS]; ROWS] {
        self.cells.map(|row| row.map(|c| c.code()))
    }
    /// Validates a client-supplied column index.
    pub fn column(n: i64) -> Result<usize, MoveError> {
        usize::try_from(n)
            .ok()
            .filter(|&c| c < COLS)
            .ok_or(MoveError::OutOfRange(n))
    }
}

/// Replays a sequence of column digits, alternating seats from Seat One.
impl TryFrom<&str> for Board {
    type Error = anyhow::Error;
    fn try_from(moves: &str) -> Result<Self, Self::Error> {
        let mut board = Self::default();
        let mut seat = Seat::One;
        for ch in moves.chars() {
            let col = ch
                .to_digit(10)
                .map(|d| d as usize)
                .ok_or_else(|| anyhow::anyhow!("could not parse '{}' as a column", ch))?;
            board.place(col, seat)?;
            seat = seat.opponent();
        }
        Ok(board)
    }
}

/// Builds a board from its wire grid, rejecting floating discs.
impl TryFrom<[[u8; COLS]; ROWS]> for Board {
    type Error = anyhow::Error;
    fn try_from(grid: [[u8; COLS]; ROWS]) -> Result<Self, Self::Error> {
        let mut board = Self::default();
        for (r, row) in grid.iter().enumerate() {
            for (c, code) in row.iter().enumerate() {
                board.cells[r][c] = match code {
                    0 => Cell::Empty,
                    1 => Cell::PlayerOne,
                    2 => Cell::PlayerTwo,
                    n => return Err(anyhow::anyhow!("invalid cell code {} at ({}, {})", n, r, c)),
                };
            }
        }
        for c in 0..COLS {
            for r in 1..ROWS {
                if !board.cells[r - 1][c].is_empty() && board.cells[r][c].is_empty() {
                    return Err(anyhow::anyhow!("floating disc in column {}", c));
                }
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
