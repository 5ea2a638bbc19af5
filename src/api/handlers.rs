//! API Handlers
//!
//! HTTP request handlers for each endpoint. Single-entity reads and all
//! writes go through the cached repositories; listings read the store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::{CacheAlgorithm, CacheFactory};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{
    Comment, CommentPatch, DeleteResponse, HealthResponse, NewComment, NewNews, News, NewsPatch,
    StatsResponse,
};
use crate::store::MemoryRepository;
use crate::sync::{CachedRepository, Repository};

/// News store fronted by the `news` cache.
pub type NewsRepository = CachedRepository<MemoryRepository<News>>;
/// Comment store fronted by the `comments` cache.
pub type CommentRepository = CachedRepository<MemoryRepository<Comment>>;

/// Application state shared across all handlers.
///
/// Each entity kind owns an independent cache instance built by the same
/// factory.
#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsRepository>,
    pub comments: Arc<CommentRepository>,
    pub algorithm: CacheAlgorithm,
}

impl AppState {
    /// Creates empty stores with one cache per entity kind.
    pub fn new(factory: &CacheFactory) -> Self {
        Self {
            news: Arc::new(CachedRepository::with_factory(
                "news",
                MemoryRepository::new(),
                factory,
            )),
            comments: Arc::new(CachedRepository::with_factory(
                "comments",
                MemoryRepository::new(),
                factory,
            )),
            algorithm: factory.algorithm(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured cache algorithm is unknown.
    pub fn from_config(config: &Config) -> Result<Self> {
        let factory = CacheFactory::from_config(&config.cache)?;
        Ok(Self::new(&factory))
    }
}

fn validated<T>(body: T, check: impl FnOnce(&T) -> Option<String>) -> Result<T> {
    match check(&body) {
        Some(error_msg) => Err(ServiceError::InvalidRequest(error_msg)),
        None => Ok(body),
    }
}

// == News ==

/// Handler for POST /news
pub async fn create_news_handler(
    State(state): State<AppState>,
    Json(req): Json<NewNews>,
) -> Result<(StatusCode, Json<News>)> {
    let req = validated(req, NewNews::validate)?;
    let news = state.news.save(req).await?;

    Ok((StatusCode::CREATED, Json(news)))
}

/// Handler for GET /news/:id
pub async fn get_news_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<News>> {
    Ok(Json(state.news.find_by_id(&id).await?))
}

/// Handler for PATCH /news/:id
pub async fn update_news_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<NewsPatch>,
) -> Result<Json<News>> {
    let req = validated(req, NewsPatch::validate)?;
    Ok(Json(state.news.update(&id, req).await?))
}

/// Handler for DELETE /news/:id
///
/// Comments on the article are deleted with it, each through the comment
/// cache so no orphan stays cached.
pub async fn delete_news_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    state.news.delete_by_id(&id).await?;

    let orphans = state
        .comments
        .inner()
        .find_all(|comment| comment.news_id == id)
        .await;
    for comment in &orphans {
        state.comments.delete_by_id(&comment.id).await?;
    }
    if !orphans.is_empty() {
        tracing::debug!(news_id = id, count = orphans.len(), "cascaded comment delete");
    }

    Ok(Json(DeleteResponse::new("News", id)))
}

/// Handler for GET /news/:id/comments
pub async fn list_news_comments_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Comment>>> {
    state.news.find_by_id(&id).await?;
    let comments = state
        .comments
        .inner()
        .find_all(|comment| comment.news_id == id)
        .await;

    Ok(Json(comments))
}

// == Comments ==

/// Handler for POST /comments
///
/// The target news is checked in the news store directly, so the check does
/// not count as a news cache access. A missing article is a 404 and nothing
/// is stored.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Json(req): Json<NewComment>,
) -> Result<(StatusCode, Json<Comment>)> {
    let req = validated(req, NewComment::validate)?;
    state.news.inner().find_by_id(&req.news_id).await?;
    let comment = state.comments.save(req).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Handler for GET /comments/:id
pub async fn get_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Comment>> {
    Ok(Json(state.comments.find_by_id(&id).await?))
}

/// Handler for PATCH /comments/:id
pub async fn update_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<CommentPatch>,
) -> Result<Json<Comment>> {
    let req = validated(req, CommentPatch::validate)?;
    Ok(Json(state.comments.update(&id, req).await?))
}

/// Handler for DELETE /comments/:id
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    state.comments.delete_by_id(&id).await?;
    Ok(Json(DeleteResponse::new("Comment", id)))
}

// == Service ==

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        algorithm: state.algorithm.to_string(),
        news: state.news.stats().await.into(),
        comments: state.comments.stats().await.into(),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
