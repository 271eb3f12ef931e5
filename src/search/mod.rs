//! Computer opponent: static evaluation and alpha-beta minimax.
mod heuristic;
mod minimax;
mod value;

pub use heuristic::*;
pub use minimax::*;
pub use value::*;
