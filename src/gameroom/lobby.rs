use super::*;
use crate::REPLY_DELAY_MS;
use crate::SEARCH_DEPTH;
use crate::board::Seat;
use crate::game::Rejection;
use crate::search::Minimax;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

/// Tunables for computer opponents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Search depth in plies.
    pub depth: usize,
    /// Pause before the computer replies.
    pub delay: Duration,
    /// Fixed seed for tie-breaking; random per room when None.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            delay: Duration::from_millis(REPLY_DELAY_MS),
            seed: None,
        }
    }
}

/// Registry of live rooms, shared by every websocket bridge.
///
/// The map lock is never held while waiting on a room lock, so a slow
/// computer search in one room never stalls lookups for the others.
pub struct Lobby {
    rooms: RwLock<HashMap<RoomId, Arc<Mutex<Room>>>>,
    count: AtomicU64,
    settings: Settings,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Lobby {
    pub fn new(settings: Settings) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            count: AtomicU64::new(1),
            settings,
        }
    }
    /// Registers a new client socket.
    pub fn connect(&self, tx: UnboundedSender<String>) -> Connection {
        let id = self.count.fetch_add(1, Ordering::Relaxed);
        log::debug!("[lobby] connection {} opened", id);
        Connection::new(id, tx)
    }
    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
    pub async fn contains(&self, id: &str) -> bool {
        self.rooms.read().await.contains_key(id)
    }
    async fn room(&self, id: &str) -> Option<Arc<Mutex<Room>>> {
        self.rooms.read().await.get(id).cloned()
    }
    fn computer(&self) -> Box<dyn Player> {
        match self.settings.seed {
            Some(seed) => Box::new(Minimax::seeded(self.settings.depth, seed)),
            None => Box::new(Minimax::new(self.settings.depth)),
        }
    }
}

impl Lobby {
    /// Handles one inbound text frame. Failures are reported to the sender only.
    pub async fn dispatch(self: &Arc<Self>, conn: &Connection, text: &str) {
        let result = match Protocol::decode(text) {
            Ok(ClientMessage::CreateRoom { mode }) => {
                self.create(conn, &mode).await.map(|_| ()).map_err(|e| e.to_string())
            }
            Ok(ClientMessage::JoinRoom { room_id }) => {
                self.join(conn, &room_id).await.map(|_| ()).map_err(|e| e.to_string())
            }
            Ok(ClientMessage::MakeMove {
                room_id,
                column,
                player_num,
            }) => self
                .play(conn, &room_id, column, player_num)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => {
                log::warn!("[lobby] connection {}: {}", conn.id(), e);
                Err(e.to_string())
            }
        };
        if let Err(message) = result {
            log::debug!("[lobby] connection {} refused: {}", conn.id(), message);
            conn.send(&ServerMessage::error(&message));
        }
    }

    /// Opens a room with `conn` in seat One.
    pub async fn create(&self, conn: &Connection, mode: &str) -> Result<RoomId, ProtocolError> {
        let mode = Mode::try_from(mode)?;
        let computer = match mode {
            Mode::Ai => Some(self.computer()),
            Mode::Multiplayer => None,
        };
        let mut rooms = self.rooms.write().await;
        let id = loop {
            let id = RoomId::random();
            if !rooms.contains_key(&id) {
                break id;
            }
        };
        let room = Room::new(id.clone(), mode, conn.clone(), computer);
        conn.send(&ServerMessage::room_created(id.as_str(), Seat::One));
        room.broadcast(&ServerMessage::update_board(room.game()));
        rooms.insert(id.clone(), Arc::new(Mutex::new(room)));
        log::info!("[lobby] opened {} room {} for connection {}", mode, id, conn.id());
        Ok(id)
    }

    /// Seats `conn` in an existing multiplayer room.
    pub async fn join(&self, conn: &Connection, id: &str) -> Result<Seat, ProtocolError> {
        let handle = self.room(id).await.ok_or(ProtocolError::RoomNotFound)?;
        let mut room = handle.lock().await;
        let seat = room.join(conn.clone())?;
        conn.send(&ServerMessage::room_joined(id, seat));
        room.broadcast(&ServerMessage::update_board(room.game()));
        Ok(seat)
    }

    /// Applies a human move and, when the computer is next, schedules its reply.
    /// Moves naming an unknown room are ignored.
    pub async fn play(
        self: &Arc<Self>,
        conn: &Connection,
        id: &str,
        column: i64,
        claimed: i64,
    ) -> Result<(), Rejection> {
        let Some(handle) = self.room(id).await else {
            log::debug!("[lobby] move for unknown room {} ignored", id);
            return Ok(());
        };
        let mut room = handle.lock().await;
        if room.is_closed() {
            return Ok(());
        }
        let applied = room.submit(conn.id(), column, claimed)?;
        room.announce(applied);
        if room.is_computer_turn() {
            self.schedule(&mut room);
        }
        Ok(())
    }

    /// Spawns the delayed computer reply and parks its handle on the room.
    fn schedule(self: &Arc<Self>, room: &mut Room) {
        let lobby = Arc::clone(self);
        let id = room.id().clone();
        let delay = self.settings.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            lobby.reply(id.as_str()).await;
        });
        room.schedule(task.abort_handle());
    }

    /// Fires a computer reply. No-op if the room is gone or the turn has moved on.
    pub async fn reply(&self, id: &str) {
        let Some(handle) = self.room(id).await else {
            return;
        };
        let mut room = handle.lock().await;
        room.settle();
        if room.is_closed() {
            return;
        }
        if let Some(applied) = room.reply().await {
            room.announce(applied);
        }
    }

    /// Vacates every seat held by `conn`, notifies whoever remains,
    /// and drops rooms left empty.
    pub async fn disconnect(&self, conn: ConnectionId) {
        let handles = self
            .rooms
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        let mut emptied = Vec::new();
        for handle in handles {
            let mut room = handle.lock().await;
            if room.leave(conn) {
                room.broadcast(&ServerMessage::player_left());
                if room.is_closed() {
                    emptied.push(room.id().clone());
                }
            }
        }
        if !emptied.is_empty() {
            let mut rooms = self.rooms.write().await;
            for id in emptied {
                rooms.remove(&id);
                log::info!("[lobby] closed room {}", id);
            }
        }
        log::debug!("[lobby] connection {} closed", conn);
    }
}
