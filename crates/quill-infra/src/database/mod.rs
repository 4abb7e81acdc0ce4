//! Database connection management and the Postgres post repository.

mod connections;
pub mod entity;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, connect, ensure_database};
pub use postgres_repo::PostgresPostRepository;

#[cfg(test)]
mod tests;
