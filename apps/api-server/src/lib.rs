//! # Blog API Server
//!
//! Library surface of the server binary, shared with the integration tests.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
