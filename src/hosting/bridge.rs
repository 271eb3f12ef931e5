use crate::gameroom::Lobby;
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;

/// Spawns the task that pumps one websocket into the lobby.
///
/// Outbound messages queued on the connection are written to the socket;
/// inbound text frames are dispatched in arrival order. When either side
/// goes away the connection is disconnected from every room it sat in.
pub fn bridge(
    lobby: Arc<Lobby>,
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
) {
    use futures::StreamExt;
    let (tx, mut rx) = unbounded_channel::<String>();
    let conn = lobby.connect(tx);
    log::info!("[bridge {}] client connected", conn.id());
    actix_web::rt::spawn(async move {
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if session.text(json).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => lobby.dispatch(&conn, &text).await,
                    Some(Ok(actix_ws::Message::Ping(bytes))) => {
                        if session.pong(&bytes).await.is_err() { break 'sesh }
                    }
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(e)) => {
                        log::warn!("[bridge {}] protocol error: {}", conn.id(), e);
                        break 'sesh
                    }
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        lobby.disconnect(conn.id()).await;
        let _ = session.close(None).await;
        log::info!("[bridge {}] client disconnected", conn.id());
    });
}
