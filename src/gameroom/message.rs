use crate::COLS;
use crate::ROWS;
use crate::board::Seat;
use crate::game::Game;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from client to server over WebSocket.
/// Envelope is `{"type": ..., "data": {...}}`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Open a room; the sender takes seat 1.
    CreateRoom {
        #[serde(default)]
        mode: String,
    },
    /// Take the free seat of an existing multiplayer room.
    JoinRoom {
        #[serde(default)]
        room_id: String,
    },
    /// Drop a disc as `player_num`.
    MakeMove {
        room_id: String,
        column: i64,
        player_num: i64,
    },
}

/// Full game state as shown to every participant.
/// `winner` is 0 for both a draw and an unfinished game.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Snapshot {
    pub board: [[u8; COLS]; ROWS],
    pub game_over: bool,
    pub current_turn: u8,
    pub winner: u8,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().rows(),
            game_over: game.is_over(),
            current_turn: game.turn().number(),
            winner: game.winner().map(|s| s.number()).unwrap_or(0),
        }
    }
}

/// Messages sent from server to client over WebSocket.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    RoomCreated { room_id: String, player_num: u8 },
    RoomJoined { room_id: String, player_num: u8 },
    UpdateBoard(Snapshot),
    GameOver(Snapshot),
    PlayerLeft { message: String },
    Error { message: String },
}

impl ServerMessage {
    pub fn room_created(room: &str, seat: Seat) -> Self {
        Self::RoomCreated {
            room_id: room.to_string(),
            player_num: seat.number(),
        }
    }
    pub fn room_joined(room: &str, seat: Seat) -> Self {
        Self::RoomJoined {
            room_id: room.to_string(),
            player_num: seat.number(),
        }
    }
    pub fn update_board(game: &Game) -> Self {
        Self::UpdateBoard(Snapshot::from(game))
    }
    pub fn game_over(game: &Game) -> Self {
        Self::GameOver(Snapshot::from(game))
    }
    pub fn player_left() -> Self {
        Self::PlayerLeft {
            message: "The other player has disconnected.".to_string(),
        }
    }
    pub fn error<E: std::fmt::Display>(e: &E) -> Self {
        Self::Error {
            message: e.to_string(),
        }
    }
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use serde_json::json;

    fn encode(msg: &ServerMessage) -> serde_json::Value {
        serde_json::from_str(&msg.to_json().unwrap()).unwrap()
    }

    #[test]
    fn room_created_envelope() {
        assert_eq!(
            encode(&ServerMessage::room_created("ab12cd34", Seat::One)),
            json!({"type": "room_created", "data": {"room_id": "ab12cd34", "player_num": 1}})
        );
    }
    #[test]
    fn update_board_envelope() {
        let game = Game::from(Board::try_from("3").unwrap());
        let value = encode(&ServerMessage::update_board(&game));
        assert_eq!(value["type"], "update_board");
        assert_eq!(value["data"]["game_over"], false);
        assert_eq!(value["data"]["current_turn"], 2);
        assert_eq!(value["data"]["winner"], 0);
        assert_eq!(value["data"]["board"][5][3], 1);
        assert_eq!(value["data"]["board"][0][3], 0);
        assert_eq!(value["data"]["board"].as_array().unwrap().len(), ROWS);
    }
    #[test]
    fn game_over_carries_winner() {
        let game = Game::from(Board::try_from("0616263").unwrap());
        let value = encode(&ServerMessage::game_over(&game));
        assert_eq!(value["type"], "game_over");
        assert_eq!(value["data"]["game_over"], true);
        assert_eq!(value["data"]["winner"], 1);
    }
    #[test]
    fn error_envelope() {
        assert_eq!(
            encode(&ServerMessage::error(&"Room full")),
            json!({"type": "error", "data": {"message": "Room full"}})
        );
    }
}
