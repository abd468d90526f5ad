//! HTTP server module.
//!
//! Serves plain HTTP on the configured address and shuts down gracefully on
//! SIGTERM/SIGINT, draining in-flight connections.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
