//! Networking modules for the GIF proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema.

pub mod api;
pub mod types;
