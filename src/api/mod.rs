//! API Module
//!
//! HTTP handlers and routing for the news service REST API.
//!
//! # Endpoints
//! - `POST /news`, `GET|PATCH|DELETE /news/:id`
//! - `GET /news/:id/comments` - Comments of one news article
//! - `POST /comments`, `GET|PATCH|DELETE /comments/:id`
//! - `GET /stats` - Cache statistics per namespace
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
