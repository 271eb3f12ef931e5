//! Rooms, the wire protocol, and the lobby that routes client messages.
mod connection;
mod lobby;
mod message;
mod mode;
mod player;
mod players;
mod protocol;
mod room;

pub use connection::*;
pub use lobby::*;
pub use message::*;
pub use mode::*;
pub use player::*;
pub use protocol::*;
pub use room::*;
