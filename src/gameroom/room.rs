use super::*;
use crate::board::Seat;
use crate::game::Applied;
use crate::game::Game;
use crate::game::Rejection;
use crate::game::Status;
use tokio::task::AbortHandle;

/// One game plus the connections seated at it.
///
/// Key responsibilities:
/// - Seat humans and, in AI mode, the computer in seat Two
/// - Enforce turn order and seat ownership on submitted moves
/// - Broadcast the full snapshot after every accepted move
/// - Own the pending computer reply so closing the room cancels it
pub struct Room {
    id: RoomId,
    mode: Mode,
    game: Game,
    seats: [Option<Connection>; 2],
    computer: Option<Box<dyn Player>>,
    pending: Option<AbortHandle>,
    closed: bool,
}

impl Room {
    /// Opens a room with `host` in seat One.
    pub fn new(
        id: RoomId,
        mode: Mode,
        host: Connection,
        computer: Option<Box<dyn Player>>,
    ) -> Self {
        Self {
            id,
            mode,
            game: Game::default(),
            seats: [Some(host), None],
            computer,
            pending: None,
            closed: false,
        }
    }
    pub fn id(&self) -> &RoomId {
        &self.id
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn is_closed(&self) -> bool {
        self.closed
    }
    /// Number of connected humans.
    pub fn occupants(&self) -> usize {
        self.seats.iter().flatten().count()
    }
    pub fn is_empty(&self) -> bool {
        self.occupants() == 0
    }
    /// Whether both seats have an occupant, human or computer.
    pub fn is_seated(&self) -> bool {
        match self.mode {
            Mode::Ai => self.seats[Seat::One.index()].is_some(),
            Mode::Multiplayer => self.seats.iter().all(Option::is_some),
        }
    }
    pub fn status(&self) -> Status {
        self.game.status(self.is_seated())
    }
    /// Whether the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.computer.is_some() && !self.game.is_over() && self.game.turn() == Seat::Two
    }
    fn holds(&self, conn: ConnectionId, seat: Seat) -> bool {
        self.seats[seat.index()]
            .as_ref()
            .is_some_and(|c| c.id() == conn)
    }
}

impl Room {
    /// Seats `conn` in the free seat.
    pub fn join(&mut self, conn: Connection) -> Result<Seat, ProtocolError> {
        if self.closed {
            return Err(ProtocolError::RoomNotFound);
        }
        if self.seats.iter().all(Option::is_some) {
            return Err(ProtocolError::RoomFull);
        }
        if self.mode == Mode::Ai {
            return Err(ProtocolError::AiRoomNotJoinable);
        }
        let seat = match self.seats[Seat::One.index()] {
            None => Seat::One,
            Some(_) => Seat::Two,
        };
        log::info!("[room {}] connection {} takes seat {}", self.id, conn.id(), seat);
        self.seats[seat.index()] = Some(conn);
        Ok(seat)
    }
    /// Removes `conn` from any seat it holds. Returns whether it was seated.
    /// A room left empty is closed.
    pub fn leave(&mut self, conn: ConnectionId) -> bool {
        let mut seated = false;
        for seat in self.seats.iter_mut() {
            if seat.as_ref().is_some_and(|c| c.id() == conn) {
                *seat = None;
                seated = true;
            }
        }
        if seated {
            log::info!("[room {}] connection {} left", self.id, conn);
        }
        if seated && self.is_empty() {
            self.close();
        }
        seated
    }
    /// Stops accepting joins and cancels any pending computer reply.
    pub fn close(&mut self) {
        self.closed = true;
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Room {
    /// A move from `conn` claiming to be `claimed`.
    /// Rejected without mutation unless the game is running, `claimed`
    /// holds the turn and is seated by `conn`, and the column has room.
    pub fn submit(
        &mut self,
        conn: ConnectionId,
        column: i64,
        claimed: i64,
    ) -> Result<Applied, Rejection> {
        if self.game.is_over() {
            return Err(Rejection::GameOver);
        }
        let seat = Seat::try_from(claimed).map_err(|_| Rejection::NotYourTurn)?;
        if seat != self.game.turn() || !self.holds(conn, seat) {
            return Err(Rejection::NotYourTurn);
        }
        if !self.is_seated() {
            return Err(Rejection::WaitingForOpponent);
        }
        self.game
            .submit(column, seat)
            .inspect(|_| log::debug!("[room {}] {} plays column {}", self.id, seat, column))
    }
    /// Asks the computer for its move and applies it on its behalf.
    pub async fn reply(&mut self) -> Option<Applied> {
        if !self.is_computer_turn() {
            return None;
        }
        let column = self.computer.as_mut()?.decide(&self.game).await?;
        self.game
            .play(column)
            .inspect_err(|e| log::error!("[room {}] computer move rejected: {}", self.id, e))
            .ok()
    }
    /// Remembers the task that will deliver the computer's reply.
    pub fn schedule(&mut self, task: AbortHandle) {
        if let Some(previous) = self.pending.replace(task) {
            previous.abort();
        }
    }
    /// Forgets the pending reply once it has fired.
    pub fn settle(&mut self) {
        self.pending = None;
    }
}

impl Room {
    /// Sends a message to every seated connection.
    pub fn broadcast(&self, msg: &ServerMessage) {
        log::debug!("[room {}] broadcast: {:?}", self.id, msg);
        self.seats
            .iter()
            .flatten()
            .filter(|conn| !conn.send(msg))
            .for_each(|conn| log::warn!("[room {}] broadcast to {} failed", self.id, conn.id()));
    }
    /// Broadcasts the board, then the final state if `applied` ended the game.
    pub fn announce(&self, applied: Applied) {
        self.broadcast(&ServerMessage::update_board(&self.game));
        if applied.is_finished() {
            log::info!("[room {}] game over: {:?}", self.id, self.game.outcome());
            self.broadcast(&ServerMessage::game_over(&self.game));
        }
    }
}
