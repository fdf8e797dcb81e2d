//! Quotery server library: router, config, and state construction.
//!
//! Exposed as a library so integration tests can build the router and
//! drive it without binding a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
