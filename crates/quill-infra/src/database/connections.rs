use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, DbConn, DbErr, Statement};

/// Connection settings for the posts database, read from the environment
/// by the server binary.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub name: String,
    /// TLS root certificate path; when set, connections require full
    /// certificate verification.
    pub ssl_root_cert: Option<String>,
    /// Maximum pooled connections.
    pub pool_size: u32,
    /// Cap on queued acquire requests. The pool queues waiters without a
    /// hard cap, so a non-zero value is logged rather than enforced.
    pub queue_limit: u32,
}

impl DatabaseConfig {
    /// Connection URL for the posts database.
    pub fn url(&self) -> String {
        self.url_for(&self.name)
    }

    /// Connection URL for the maintenance database, used to create the
    /// posts database when it does not exist yet.
    pub fn maintenance_url(&self) -> String {
        self.url_for("postgres")
    }

    fn url_for(&self, db_name: &str) -> String {
        let mut url = format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, db_name
        );
        if let Some(ca) = &self.ssl_root_cert {
            url.push_str("?sslmode=verify-full&sslrootcert=");
            url.push_str(ca);
        }
        url
    }
}

/// Create the configured database when it is absent.
///
/// Mirrors the schema-bootstrap step the server runs before serving any
/// traffic: connect to the maintenance database, check `pg_database`, and
/// issue `CREATE DATABASE` only on a miss (Postgres has no IF NOT EXISTS
/// for databases).
pub async fn ensure_database(config: &DatabaseConfig) -> Result<(), DbErr> {
    let admin = Database::connect(config.maintenance_url()).await?;

    let exists = admin
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [config.name.clone().into()],
        ))
        .await?
        .is_some();

    if exists {
        tracing::debug!(database = %config.name, "database already exists");
    } else {
        tracing::info!(database = %config.name, "creating database");
        admin
            .execute_unprepared(&format!("CREATE DATABASE \"{}\"", config.name))
            .await?;
    }

    admin.close().await
}

/// Connect the process-wide connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    if config.queue_limit > 0 {
        tracing::warn!(
            queue_limit = config.queue_limit,
            "DB_QUEUE_LIMIT is not enforced by the pool; acquires queue unbounded"
        );
    }

    let opts = ConnectOptions::new(config.url())
        .max_connections(config.pool_size)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(pool_size = config.pool_size, "database connected");
    Ok(conn)
}
