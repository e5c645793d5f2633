//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! database connection management and the post repositories.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repository via SeaORM
//!
//! The in-memory repository is always available and carries no external
//! dependencies.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
