//! REST wrappers, one module per functional area.
//!
//! ARCHITECTURE
//! ============
//! Every function is a thin pass-through: format the endpoint, delegate to
//! `net::http`, return the decoded body. No caching, retries, or local
//! bookkeeping lives here.

pub mod assets;
pub mod attendance;
pub mod auth;
pub mod delivery;
pub mod finance;
pub mod inventory;
pub mod kitchen;
pub mod menus;
pub mod purchasing;
pub mod recipes;
