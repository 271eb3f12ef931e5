use super::*;
use crate::CONNECT;
use crate::board::Board;
use crate::board::Seat;

/// Turn and outcome bookkeeping for one room's board.
///
/// Seat One moves first and seats alternate after every accepted move
/// until a seat completes a run of four or the board fills. A finished
/// game accepts no further moves; rematches use a fresh game.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Seat,
    outcome: Option<Outcome>,
}

impl Game {
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Seat {
        self.turn
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
    pub fn winner(&self) -> Option<Seat> {
        self.outcome.and_then(|o| o.winner())
    }
    /// Lifecycle state given whether both seats are occupied.
    pub fn status(&self, seated: bool) -> Status {
        match self.outcome {
            Some(outcome) => Status::Finished(outcome),
            None if seated => Status::InProgress,
            None => Status::WaitingForOpponent,
        }
    }

    /// A move claimed by `claimed`. Checks, in order: game still running,
    /// claimant holds the turn, column exists and has room.
    pub fn submit(&mut self, column: i64, claimed: Seat) -> Result<Applied, Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }
        if claimed != self.turn {
            return Err(Rejection::NotYourTurn);
        }
        self.play(Board::column(column)?)
    }

    /// A move for whichever seat holds the turn.
    pub fn play(&mut self, column: usize) -> Result<Applied, Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }
        let mover = self.turn;
        self.board.place(column, mover)?;
        if self.board.has_run(mover, CONNECT) {
            self.outcome = Some(Outcome::Win(mover));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.turn = mover.opponent();
        }
        Ok(self
            .outcome
            .map(Applied::Finished)
            .unwrap_or(Applied::Continue(self.turn)))
    }
}

/// Resumes a game from a position, inferring the turn from disc parity.
impl From<Board> for Game {
    fn from(board: Board) -> Self {
        let outcome = match board.winner() {
            Some(seat) => Some(Outcome::Win(seat)),
            None if board.is_full() => Some(Outcome::Draw),
            None => None,
        };
        let turn = match board.filled() % 2 {
            0 => Seat::One,
            _ => Seat::Two,
        };
        Self {
            board,
            turn,
            outcome,
        }
    }
}
