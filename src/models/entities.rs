//! Entities owned by the backing stores.
//!
//! These are also the cached values: the cache holds the exact view the
//! store returned.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{CommentPatch, NewComment, NewNews, NewsPatch};
use crate::store::Record;

/// A published news article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct News {
    pub id: u64,
    pub title: String,
    pub text: String,
    pub username: String,
    pub time: DateTime<Utc>,
}

/// A comment attached to a news article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: u64,
    pub news_id: u64,
    pub text: String,
    pub username: String,
    pub time: DateTime<Utc>,
}

impl Record for News {
    const ENTITY: &'static str = "News";
    type New = NewNews;
    type Patch = NewsPatch;

    fn create(id: u64, new: NewNews, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            text: new.text,
            username: new.username,
            time: now,
        }
    }

    fn apply(&mut self, patch: NewsPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
    }

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Comment {
    const ENTITY: &'static str = "Comment";
    type New = NewComment;
    type Patch = CommentPatch;

    fn create(id: u64, new: NewComment, now: DateTime<Utc>) -> Self {
        Self {
            id,
            news_id: new.news_id,
            text: new.text,
            username: new.username,
            time: now,
        }
    }

    fn apply(&mut self, patch: CommentPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
    }

    fn id(&self) -> u64 {
        self.id
    }
}
