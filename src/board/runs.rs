use super::*;
use crate::COLS;
use crate::CONNECT;
use crate::ROWS;

/// The four line orientations a run can take.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Up and to the right.
    Rising,
    /// Down and to the right.
    Falling,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Rising,
        Self::Falling,
    ];
    /// (row, column) step between consecutive cells. Row 0 is the top.
    fn step(&self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Rising => (-1, 1),
            Self::Falling => (1, 1),
        }
    }
    /// Whether a run of `length` starting at (row, col) stays on the board.
    fn fits(&self, row: usize, col: usize, length: usize) -> bool {
        let (dr, dc) = self.step();
        let span = length as isize - 1;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        (0..ROWS as isize).contains(&end_row) && (0..COLS as isize).contains(&end_col)
    }
    /// Cells of the run of `length` starting at (row, col).
    fn cells(&self, row: usize, col: usize, length: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.step();
        (0..length as isize).map(move |i| {
            (
                (row as isize + dr * i) as usize,
                (col as isize + dc * i) as usize,
            )
        })
    }
}

impl Board {
    /// Every on-board window of `length` cells, as (direction, start row, start col).
    /// Overlapping windows are all yielded.
    pub fn windows(length: usize) -> impl Iterator<Item = (Direction, usize, usize)> {
        Direction::ALL
            .into_iter()
            .flat_map(|d| (0..ROWS).map(move |r| (d, r)))
            .flat_map(|(d, r)| (0..COLS).map(move |c| (d, r, c)))
            .filter(move |&(d, r, c)| length > 0 && d.fits(r, c, length))
    }
    fn owns(
        &self,
        seat: Seat,
        direction: Direction,
        row: usize,
        col: usize,
        length: usize,
    ) -> bool {
        let cell = Cell::from(seat);
        direction
            .cells(row, col, length)
            .all(|(r, c)| self.cell(r, c) == cell)
    }
    /// Whether `seat` holds `length` consecutive cells in any direction.
    /// Stops at the first match.
    pub fn has_run(&self, seat: Seat, length: usize) -> bool {
        Self::windows(length).any(|(d, r, c)| self.owns(seat, d, r, c, length))
    }
    /// Number of windows of `length` fully held by `seat`, overlaps included.
    pub fn count_runs(&self, seat: Seat, length: usize) -> usize {
        Self::windows(length)
            .filter(|&(d, r, c)| self.owns(seat, d, r, c, length))
            .count()
    }
    /// The seat holding a winning run, if any.
    pub fn winner(&self) -> Option<Seat> {
        [Seat::One, Seat::Two]
            .into_iter()
            .find(|&s| self.has_run(s, CONNECT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [&str; ROWS]) -> Board {
        let mut codes = [[0u8; COLS]; ROWS];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                codes[r][c] = match ch {
                    'X' => 1,
                    'O' => 2,
                    _ => 0,
                };
            }
        }
        Board::try_from(codes).unwrap()
    }

    #[test]
    fn window_counts() {
        // 6*4 horizontal + 3*7 vertical + 2 * 3*4 diagonal
        assert_eq!(Board::windows(4).count(), 24 + 21 + 12 + 12);
        assert_eq!(Board::windows(0).count(), 0);
    }
    #[test]
    fn horizontal_run() {
        let board = grid([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..XXXX.",
        ]);
        assert!(board.has_run(Seat::One, 4));
        assert!(!board.has_run(Seat::Two, 4));
        assert_eq!(board.winner(), Some(Seat::One));
    }
    #[test]
    fn vertical_run() {
        let board = grid([
            ".......",
            ".......",
            "......O",
            "......O",
            "......O",
            "X.X.X.O",
        ]);
        assert!(board.has_run(Seat::Two, 4));
        assert!(!board.has_run(Seat::One, 4));
    }
    #[test]
    fn rising_run() {
        let board = grid([
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOX...",
        ]);
        assert!(board.has_run(Seat::One, 4));
        assert!(!board.has_run(Seat::Two, 4));
    }
    #[test]
    fn falling_run() {
        let board = grid([
            ".......",
            ".......",
            "...O...",
            "...XO..",
            "...XXO.",
            "...XXXO",
        ]);
        assert!(board.has_run(Seat::Two, 4));
        assert!(!board.has_run(Seat::One, 4));
    }
    #[test]
    fn three_is_not_four() {
        let board = grid([
            ".......",
            ".......",
            ".......",
            "O......",
            "O......",
            "OXXX...",
        ]);
        assert!(!board.has_run(Seat::One, 4));
        assert!(!board.has_run(Seat::Two, 4));
        assert_eq!(board.winner(), None);
    }
    #[test]
    fn overlapping_runs_counted() {
        let board = grid([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXXXX..",
        ]);
        assert_eq!(board.count_runs(Seat::One, 2), 4);
        assert_eq!(board.count_runs(Seat::One, 3), 3);
        assert_eq!(board.count_runs(Seat::One, 4), 2);
        assert_eq!(board.count_runs(Seat::One, 5), 1);
        assert_eq!(board.count_runs(Seat::Two, 2), 0);
    }
    #[test]
    fn single_discs_count_in_every_direction() {
        let board = Board::try_from("3").unwrap();
        assert_eq!(board.count_runs(Seat::One, 1), 4);
    }
}
