//! API Routes
//!
//! Configures the Axum router with all news service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_comment_handler, create_news_handler, delete_comment_handler, delete_news_handler,
    get_comment_handler, get_news_handler, health_handler, list_news_comments_handler,
    stats_handler, update_comment_handler, update_news_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/news", post(create_news_handler))
        .route(
            "/news/:id",
            get(get_news_handler)
                .patch(update_news_handler)
                .delete(delete_news_handler),
        )
        .route("/news/:id/comments", get(list_news_comments_handler))
        .route("/comments", post(create_comment_handler))
        .route(
            "/comments/:id",
            get(get_comment_handler)
                .patch(update_comment_handler)
                .delete(delete_comment_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
