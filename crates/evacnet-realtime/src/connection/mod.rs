//! Connection handles and the registry of live connections.

pub mod handle;
pub mod registry;
