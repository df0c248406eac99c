//! HTTP surface of the backend
//!
//! Greeting, header echo and liveness endpoints.

pub mod handlers;
