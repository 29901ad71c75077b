//! Live relay (WebSocket) configuration.

use serde::{Deserialize, Serialize};

/// Streaming relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Deliver a payload back to the connection it came from.
    #[serde(default = "default_echo")]
    pub echo_to_sender: bool,
    /// Capacity of each connection's outbound frame queue.
    #[serde(default = "default_outbound_buffer")]
    pub outbound_buffer: usize,
    /// Per-peer deadline for queueing one broadcast payload, in milliseconds.
    /// A peer that cannot accept the payload in time is dropped.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_ms: u64,
    /// Largest inbound frame accepted from a peer, in bytes.
    #[serde(default = "default_max_frame")]
    pub max_frame_bytes: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            echo_to_sender: default_echo(),
            outbound_buffer: default_outbound_buffer(),
            send_timeout_ms: default_send_timeout(),
            max_frame_bytes: default_max_frame(),
        }
    }
}

fn default_echo() -> bool {
    true
}

fn default_outbound_buffer() -> usize {
    64
}

fn default_send_timeout() -> u64 {
    250
}

fn default_max_frame() -> usize {
    16 * 1024 * 1024
}
