//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate owns the SeaORM entity for the posts table, the Postgres
//! repository, and connection-pool setup.

pub mod database;

pub use database::{DatabaseConfig, PostgresPostRepository};
