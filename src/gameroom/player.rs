use crate::game::Game;

/// Trait for automated occupants of a seat.
///
/// The room asks for a column only when it is this player's turn and the
/// game is still running. Returning None forfeits nothing; the room simply
/// leaves the turn where it is.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Column to play in the current position.
    async fn decide(&mut self, game: &Game) -> Option<usize>;
}
