/// Reasons a disc cannot be dropped into a column.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveError {
    OutOfRange(i64),
    ColumnFull(usize),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(c) => write!(f, "column {} out of range", c),
            Self::ColumnFull(c) => write!(f, "column {} is full", c),
        }
    }
}

impl std::error::Error for MoveError {}
