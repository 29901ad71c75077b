//! Individual WebSocket connection handle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::sync::mpsc::error::SendTimeoutError;
use uuid::Uuid;

/// Unique connection identifier
pub type ConnectionId = Uuid;

/// Why a payload could not be queued for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    /// The connection is closed or its writer has gone away.
    #[error("connection closed")]
    Closed,
    /// The outbound queue stayed full past the send deadline.
    #[error("send timed out")]
    Timeout,
}

/// A handle to a single relay connection.
///
/// Holds the sending half of the connection's bounded outbound queue. The
/// socket writer task owns the receiving half.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Remote address, when the transport exposes it
    pub peer_addr: Option<SocketAddr>,
    /// When the connection was accepted
    pub connected_at: DateTime<Utc>,
    /// Sender for outbound payloads
    sender: mpsc::Sender<Bytes>,
    /// Cleared once the connection is closed; never set again
    alive: AtomicBool,
    /// Flips to `true` when the connection is closed
    closed_tx: watch::Sender<bool>,
}

impl ConnectionHandle {
    /// Create a handle together with the receiving end of its outbound
    /// queue, which holds at most `buffer` payloads.
    pub fn channel(
        buffer: usize,
        peer_addr: Option<SocketAddr>,
    ) -> (Arc<Self>, mpsc::Receiver<Bytes>) {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        let handle = Arc::new(Self {
            id: Uuid::new_v4(),
            peer_addr,
            connected_at: Utc::now(),
            sender,
            alive: AtomicBool::new(true),
            closed_tx: watch::Sender::new(false),
        });
        (handle, receiver)
    }

    /// Queue a payload, waiting at most `deadline` for queue space.
    pub async fn send(&self, payload: Bytes, deadline: Duration) -> Result<(), SendError> {
        if !self.is_alive() {
            return Err(SendError::Closed);
        }
        match self.sender.send_timeout(payload, deadline).await {
            Ok(()) => Ok(()),
            Err(SendTimeoutError::Timeout(_)) => Err(SendError::Timeout),
            Err(SendTimeoutError::Closed(_)) => {
                self.mark_closed();
                Err(SendError::Closed)
            }
        }
    }

    /// Check if connection is alive
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark the connection closed and wake every task waiting in
    /// [`ConnectionHandle::closed`].
    pub fn mark_closed(&self) {
        self.alive.store(false, Ordering::SeqCst);
        self.closed_tx.send_replace(true);
    }

    /// Resolves once the connection has been closed, immediately if it
    /// already is.
    pub async fn closed(&self) {
        let mut closed_rx = self.closed_tx.subscribe();
        // The sender lives in `self`, so the wait only ends on close.
        let _ = closed_rx.wait_for(|closed| *closed).await;
    }

    /// Get a snapshot of connection info
    pub fn info(&self) -> ConnectionInfo {
        ConnectionInfo {
            id: self.id,
            peer_addr: self.peer_addr,
            connected_at: self.connected_at,
            alive: self.is_alive(),
        }
    }
}

/// Snapshot of connection info (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Connection ID
    pub id: ConnectionId,
    /// Remote address
    pub peer_addr: Option<SocketAddr>,
    /// Connected at
    pub connected_at: DateTime<Utc>,
    /// Is alive
    pub alive: bool,
}
