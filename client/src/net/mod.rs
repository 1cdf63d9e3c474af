//! Networking modules for the members REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single members read and `types` defines the shared wire
//! schema used by both the page and the server.

pub mod api;
pub mod types;
