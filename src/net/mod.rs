//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds requests and interprets responses, `error` names the ways a
//! call can fail, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
