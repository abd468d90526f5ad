//! healthcheck-demo: a minimal HTTP service.
//!
//! Exposes `GET /health` as a liveness probe and `GET /` as a static greeting.

pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
