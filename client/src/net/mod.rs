//! Networking modules for the marketplace REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `resource` describes each backend collection, `types` defines the wire
//! schema and envelope parsing, `payload` builds multipart bodies, and `api`
//! performs the browser HTTP calls.

pub mod api;
pub mod error;
pub mod payload;
pub mod resource;
pub mod types;
