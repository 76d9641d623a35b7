//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only durable, mutable entity in the client; `storage`
//! isolates the browser persistence it writes through; `ui` holds transient
//! shell state.

pub mod session;
pub mod storage;
pub mod ui;
