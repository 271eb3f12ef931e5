use crate::game::Game;
use crate::gameroom::Player;
use crate::search::Minimax;

/// CPU player backed by alpha-beta search at a fixed depth.
#[async_trait::async_trait]
impl Player for Minimax {
    async fn decide(&mut self, game: &Game) -> Option<usize> {
        let seat = game.turn();
        self.best_move(game.board(), seat)
            .inspect(|(col, value)| {
                log::debug!(
                    "[minimax] {} plays column {} (value {}, {} nodes)",
                    seat,
                    col,
                    value,
                    self.nodes()
                )
            })
            .map(|(col, _)| col)
    }
}
