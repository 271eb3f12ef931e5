use super::*;

/// Errors in room-level requests. Reported to the sender only.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ProtocolError {
    InvalidMode(String),
    RoomNotFound,
    RoomFull,
    AiRoomNotJoinable,
    Malformed(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMode(_) => write!(f, "Invalid mode"),
            Self::RoomNotFound => write!(f, "Room not found"),
            Self::RoomFull => write!(f, "Room full"),
            Self::AiRoomNotJoinable => write!(f, "Cannot join an AI room"),
            Self::Malformed(s) => write!(f, "Malformed message: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Parsing of inbound websocket text.
pub struct Protocol;

impl Protocol {
    /// A missing `data` object reads as empty, so absent fields fall
    /// through to their per-message defaults.
    pub fn decode(text: &str) -> Result<ClientMessage, ProtocolError> {
        let mut envelope =
            serde_json::from_str::<serde_json::Value>(text).map_err(Self::malformed)?;
        if let Some(fields) = envelope.as_object_mut() {
            fields
                .entry("data")
                .or_insert_with(|| serde_json::Value::Object(Default::default()));
        }
        serde_json::from_value(envelope).map_err(Self::malformed)
    }
    fn malformed(e: serde_json::Error) -> ProtocolError {
        ProtocolError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_create() {
        let msg = Protocol::decode(r#"{"type":"create_room","data":{"mode":"ai"}}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::CreateRoom {
                mode: "ai".to_string()
            }
        );
    }
    #[test]
    fn decode_create_without_mode() {
        let msg = Protocol::decode(r#"{"type":"create_room","data":{}}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::CreateRoom {
                mode: String::new()
            }
        );
    }
    #[test]
    fn decode_without_data() {
        assert_eq!(
            Protocol::decode(r#"{"type":"create_room"}"#),
            Ok(ClientMessage::CreateRoom {
                mode: String::new()
            })
        );
        assert_eq!(
            Protocol::decode(r#"{"type":"join_room","data":{}}"#),
            Ok(ClientMessage::JoinRoom {
                room_id: String::new()
            })
        );
    }
    #[test]
    fn decode_move() {
        let msg = Protocol::decode(
            r#"{"type":"make_move","data":{"room_id":"ab12cd34","column":3,"player_num":1}}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            ClientMessage::MakeMove {
                room_id: "ab12cd34".to_string(),
                column: 3,
                player_num: 1,
            }
        );
    }
    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            Protocol::decode("not json"),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(matches!(
            Protocol::decode(r#"{"type":"resign","data":{}}"#),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(matches!(
            Protocol::decode(r#"{"type":"make_move","data":{"room_id":"x"}}"#),
            Err(ProtocolError::Malformed(_))
        ));
    }
    #[test]
    fn error_text() {
        assert_eq!(ProtocolError::RoomNotFound.to_string(), "Room not found");
        assert_eq!(ProtocolError::RoomFull.to_string(), "Room full");
        assert_eq!(
            ProtocolError::AiRoomNotJoinable.to_string(),
            "Cannot join an AI room"
        );
        assert_eq!(
            ProtocolError::InvalidMode("x".into()).to_string(),
            "Invalid mode"
        );
    }
}
