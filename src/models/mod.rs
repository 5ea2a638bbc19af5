//! Domain and transport models
//!
//! Entities held by the stores, the bodies accepted to create or patch them,
//! and the DTOs returned by the auxiliary endpoints.

pub mod entities;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use entities::{Comment, News};
pub use requests::{CommentPatch, NewComment, NewNews, NewsPatch};
pub use responses::{DeleteResponse, HealthResponse, NamespaceStats, StatsResponse};
