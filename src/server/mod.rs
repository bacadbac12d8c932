//! Connection acceptance
//!
//! Two interchangeable acceptors feed the same per-connection handler: a
//! task-per-connection accept loop (`listener`) and a single-threaded
//! edge-triggered readiness loop (`poller`). Config picks one at startup.

pub mod listener;
pub mod poller;
