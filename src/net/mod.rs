//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request plumbing and the shared error type, `types` defines
//! the wire schema, and `api` holds the per-area endpoint wrappers.

pub mod api;
pub mod http;
pub mod types;
