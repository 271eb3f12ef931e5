mod board;
mod cell;
mod error;
mod runs;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use runs::*;
