use super::*;

/// Who fills the second seat of a room.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Seat Two is the computer; only one human may enter.
    Ai,
    /// Both seats are humans.
    Multiplayer,
}

impl TryFrom<&str> for Mode {
    type Error = ProtocolError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "ai" => Ok(Self::Ai),
            "multiplayer" => Ok(Self::Multiplayer),
            other => Err(ProtocolError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ai => write!(f, "ai"),
            Self::Multiplayer => write!(f, "multiplayer"),
        }
    }
}

/// Short opaque room identifier handed to clients.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct RoomId(String);

impl RoomId {
    /// First eight hex digits of a random v4 UUID.
    pub fn random() -> Self {
        let mut s = uuid::Uuid::new_v4().simple().to_string();
        s.truncate(8);
        Self(s)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::borrow::Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn modes_parse() {
        assert_eq!(Mode::try_from("ai").ok(), Some(Mode::Ai));
        assert_eq!(Mode::try_from("multiplayer").ok(), Some(Mode::Multiplayer));
        assert!(matches!(
            Mode::try_from("solo"),
            Err(ProtocolError::InvalidMode(_))
        ));
        assert!(Mode::try_from("AI").is_err());
    }
    #[test]
    fn room_ids_are_short_hex() {
        let id = RoomId::random();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(RoomId::random(), RoomId::random());
    }
}
