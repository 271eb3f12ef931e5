use crate::board::MoveError;
use crate::board::Seat;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Outcome {
    Win(Seat),
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::Win(seat) => Some(*seat),
            Self::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win(seat) => write!(f, "{} wins", seat),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Lifecycle of a room's game.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Status {
    WaitingForOpponent,
    InProgress,
    Finished(Outcome),
}

/// Effect of an accepted move.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Applied {
    /// Game continues with `next` to move.
    Continue(Seat),
    Finished(Outcome),
}

impl Applied {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Why a submitted move was refused. A refused move never mutates the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Rejection {
    GameOver,
    NotYourTurn,
    WaitingForOpponent,
    Illegal(MoveError),
}

impl From<MoveError> for Rejection {
    fn from(e: MoveError) -> Self {
        Self::Illegal(e)
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameOver => write!(f, "Game is already over"),
            Self::NotYourTurn => write!(f, "Not your turn"),
            Self::WaitingForOpponent => write!(f, "Waiting for opponent"),
            Self::Illegal(_) => write!(f, "Invalid move (column might be full)"),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Illegal(e) => Some(e),
            _ => None,
        }
    }
}
