use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use sqlx::MySqlPool;
use tower_http::trace::TraceLayer;

mod health;
mod shows;

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

pub fn router(pool: MySqlPool) -> Router {
    Router::new()
        .route("/", get(shows::list))
        .route("/television_shows/{name}", get(shows::detail))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .fallback(fallback)
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
}
