//! Schema migrations for the posts database.
//!
//! The server runs these at startup through [`bootstrap`]; the binary in
//! this crate exposes the same migrations as a standalone CLI.

pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DbConn, DbErr};

mod m20240101_000001_create_posts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_posts_table::Migration)]
    }
}

/// Proof that the schema exists. Only [`bootstrap`] can mint one, so any
/// code path that requires a `SchemaReady` cannot run before migrations
/// have completed.
pub struct SchemaReady(());

/// Bring the schema up to date. Called once at process start, before the
/// server binds its listener; a failure here must abort startup.
pub async fn bootstrap(db: &DbConn) -> Result<SchemaReady, DbErr> {
    Migrator::up(db, None).await?;
    tracing::info!("schema bootstrap complete");
    Ok(SchemaReady(()))
}
