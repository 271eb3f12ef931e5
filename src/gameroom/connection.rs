use super::*;
use tokio::sync::mpsc::UnboundedSender;

pub type ConnectionId = u64;

/// Outbound half of one client's websocket.
/// The bridge task drains the paired receiver into the socket.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    tx: UnboundedSender<String>,
}

impl Connection {
    pub fn new(id: ConnectionId, tx: UnboundedSender<String>) -> Self {
        Self { id, tx }
    }
    pub fn id(&self) -> ConnectionId {
        self.id
    }
    /// Queues a message for delivery. Failures are logged, never raised.
    pub fn send(&self, msg: &ServerMessage) -> bool {
        match msg.to_json().map(|json| self.tx.send(json)) {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log::warn!("[conn {}] delivery failed: {}", self.id, e);
                false
            }
            Err(e) => {
                log::error!("[conn {}] failed to encode message: {}", self.id, e);
                false
            }
        }
    }
}
