use anyhow::Result;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};

use crate::config::DatabaseConfig;

/// Create the MySQL connection pool
///
/// The pool is bounded at `max_connections` and every connection gets the
/// configured session timezone applied before it is handed out.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool> {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name);

    if let Some(user) = &config.user {
        options = options.username(user);
    }
    if let Some(password) = &config.password {
        options = options.password(password);
    }

    let timezone = config.timezone.clone();
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .after_connect(move |conn, _meta| {
            let timezone = timezone.clone();
            Box::pin(async move {
                sqlx::query("SET time_zone = ?")
                    .bind(timezone)
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Created MySQL pool"
    );

    Ok(pool)
}

/// Liveness probe against the database
///
/// Checks out one connection, pings it, and returns it to the pool. Used by
/// the startup sequence so the server never binds its port while the
/// database is unreachable.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}
