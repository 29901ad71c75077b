//! # evacnet-realtime
//!
//! Binary WebSocket relay for EvacNet. Every frame a peer sends is fanned
//! out unchanged to the connections held in the [`ConnectionRegistry`];
//! peers whose send fails are dropped from the registry.

pub mod connection;
pub mod metrics;
pub mod server;

pub use connection::handle::{ConnectionHandle, ConnectionId, SendError};
pub use connection::registry::{BroadcastReport, ConnectionRegistry};
pub use metrics::RelayMetrics;
pub use server::RealtimeEngine;
