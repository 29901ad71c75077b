//! Core type definitions used across the EvacNet workspace.

pub mod id;

pub use id::*;
