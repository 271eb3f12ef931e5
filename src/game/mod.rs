mod game;
mod outcome;

pub use game::*;
pub use outcome::*;
