use std::cmp::Ordering;

/// Search value of a position from the searching seat's point of view.
///
/// Totally ordered: `Loss` < every `Heuristic` < `Win`.
/// `Draw` ranks equal to `Heuristic(0)`.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    Loss,
    Draw,
    Heuristic(i32),
    Win,
}

impl Value {
    fn rank(&self) -> (i8, i32) {
        match self {
            Self::Loss => (-1, 0),
            Self::Draw => (0, 0),
            Self::Heuristic(n) => (0, *n),
            Self::Win => (1, 0),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Eq for Value {}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loss => write!(f, "-inf"),
            Self::Draw => write!(f, "draw"),
            Self::Heuristic(n) => write!(f, "{}", n),
            Self::Win => write!(f, "+inf"),
        }
    }
}
