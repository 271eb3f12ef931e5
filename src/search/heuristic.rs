use crate::CENTER;
use crate::CENTER_WEIGHT;
use crate::RUN_WEIGHTS;
use crate::board::Board;
use crate::board::Seat;

/// Static evaluation of a board for `seat`; higher favors `seat`.
///
/// Own center-column discs score `CENTER_WEIGHT` each. Every window of
/// length 2, 3 and 4 held by `seat` adds its weight and every such window
/// held by the opponent subtracts it. Overlapping windows all count.
pub fn score(board: &Board, seat: Seat) -> i32 {
    let center = board.discs_in_column(CENTER, seat) as i32 * CENTER_WEIGHT;
    RUN_WEIGHTS
        .iter()
        .map(|&(length, weight)| {
            let own = board.count_runs(seat, length) as i32;
            let opp = board.count_runs(seat.opponent(), length) as i32;
            weight * (own - opp)
        })
        .sum::<i32>()
        + center
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_board_is_neutral() {
        assert_eq!(score(&Board::default(), Seat::One), 0);
        assert_eq!(score(&Board::default(), Seat::Two), 0);
    }
    #[test]
    fn center_disc_bonus() {
        let board = Board::try_from("3").unwrap();
        assert_eq!(score(&board, Seat::One), 3);
        // center bonus is not subtracted for the opponent
        assert_eq!(score(&board, Seat::Two), 0);
    }
    #[test]
    fn pairs_and_triples() {
        // X at bottom of columns 0, 1, 2; O stacked on column 6
        let board = Board::try_from("0616").unwrap();
        // X: one horizontal pair; O: one vertical pair
        assert_eq!(score(&board, Seat::One), 0);
        let board = Board::try_from("061626").unwrap();
        // X: pairs (0,1),(1,2) + triple; O: pairs rows 5-4, 4-3 + triple
        assert_eq!(score(&board, Seat::One), 0);
        let board = Board::try_from("06162").unwrap();
        // X: 2 pairs + 1 triple = 70; O: 1 pair = 10
        assert_eq!(score(&board, Seat::One), 60);
        assert_eq!(score(&board, Seat::Two), -60);
    }
    #[test]
    fn winning_run_dominates() {
        let board = Board::try_from("0615263").unwrap();
        assert!(board.has_run(Seat::One, 4));
        assert!(score(&board, Seat::One) > 10000);
        assert!(score(&board, Seat::Two) < -10000);
    }
}
