//! WebSocket relay handler.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{ConnectInfo, State, WebSocketUpgrade};
use axum::response::Response;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use tracing::{debug, info, warn};

use evacnet_realtime::RealtimeEngine;

use crate::state::AppState;

/// How long the writer may take to flush a Close frame during cleanup.
const CLOSE_GRACE: Duration = Duration::from_secs(1);

/// GET /ws/stream
pub async fn ws_stream(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    ws: WebSocketUpgrade,
) -> Response {
    let max_frame = state.realtime.config.max_frame_bytes;
    let engine = state.realtime.clone();

    ws.max_message_size(max_frame)
        .max_frame_size(max_frame)
        .on_upgrade(move |socket| handle_relay_connection(engine, peer, socket))
}

/// Serves one relay connection until the peer leaves or the server stops.
async fn handle_relay_connection(engine: Arc<RealtimeEngine>, peer: SocketAddr, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (handle, mut outbound_rx) = engine.accept(Some(peer)).await;
    let conn_id = handle.id;
    let mut shutdown = engine.shutdown_receiver();

    // Spawn outbound frame forwarder; it ends with a Close frame once the
    // connection is closed for any reason
    let writer_handle = handle.clone();
    let mut outbound_task = tokio::spawn(async move {
        loop {
            let payload = tokio::select! {
                payload = outbound_rx.recv() => payload,
                _ = writer_handle.closed() => None,
            };
            let Some(payload) = payload else { break };

            if let Err(e) = ws_tx.send(Message::Binary(payload)).await {
                debug!(conn_id = %writer_handle.id, error = %e, "Relay socket write failed");
                writer_handle.mark_closed();
                return;
            }
        }
        let _ = ws_tx.send(Message::Close(None)).await;
    });

    // Process inbound frames
    loop {
        let frame = tokio::select! {
            frame = ws_rx.next() => frame,
            _ = handle.closed() => {
                debug!(conn_id = %conn_id, "Relay connection dropped by registry");
                break;
            }
            _ = shutdown.recv() => break,
        };

        match frame {
            Some(Ok(Message::Binary(payload))) => {
                engine.relay(conn_id, payload).await;
            }
            Some(Ok(Message::Text(text))) => {
                let payload = Bytes::copy_from_slice(text.as_str().as_bytes());
                engine.relay(conn_id, payload).await;
            }
            Some(Ok(Message::Close(_))) | None => break,
            // Ping/pong is answered by the transport
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                warn!(conn_id = %conn_id, error = %e, "Relay socket read failed");
                break;
            }
        }
    }

    // Cleanup
    engine.registry.disconnect(&conn_id).await;
    handle.mark_closed();
    if tokio::time::timeout(CLOSE_GRACE, &mut outbound_task).await.is_err() {
        outbound_task.abort();
    }

    info!(conn_id = %conn_id, peer = %peer, "Relay connection closed");
}
