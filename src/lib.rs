pub mod config;
pub mod db;
pub mod error;
pub mod negotiate;
pub mod observability;
pub mod query;
pub mod routes;

/// Create the app router for testing
///
/// Builds the Axum router with all routes configured, useful for integration
/// testing without starting the full server.
pub fn create_app(pool: sqlx::MySqlPool) -> axum::Router {
    routes::router(pool)
}
