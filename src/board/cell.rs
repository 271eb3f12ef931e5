/// One of the two sides of a game.
/// Seat One always moves first.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
pub enum Seat {
    #[default]
    One,
    Two,
}

impl Seat {
    pub fn opponent(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
    /// 1-indexed player number, as exchanged with clients.
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
    /// 0-indexed slot in a room's seat array.
    pub fn index(&self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<i64> for Seat {
    type Error = anyhow::Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            n => Err(anyhow::anyhow!("no such player {}", n)),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
    pub fn owner(&self) -> Option<Seat> {
        match self {
            Self::Empty => None,
            Self::PlayerOne => Some(Seat::One),
            Self::PlayerTwo => Some(Seat::Two),
        }
    }
    /// Wire encoding: 0 empty, 1 or 2 for the owning player.
    pub fn code(&self) -> u8 {
        self.owner().map(|s| s.number()).unwrap_or(0)
    }
}

impl From<Seat> for Cell {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::One => Self::PlayerOne,
            Seat::Two => Self::PlayerTwo,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "."),
            Self::PlayerOne => write!(f, "X"),
            Self::PlayerTwo => write!(f, "O"),
        }
    }
}
