//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the session gate and backend orchestration so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod account;
pub mod session;
