//! Authorization modules.

pub mod permissions;
