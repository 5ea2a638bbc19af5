//! Request DTOs for the news API
//!
//! Bodies accepted to create or patch news and comments.

use serde::Deserialize;

/// Maximum length of a news title in characters.
pub const MAX_TITLE_LENGTH: usize = 256;

fn default_username() -> String {
    "anonymous".to_string()
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Request body for `POST /news`
#[derive(Debug, Clone, Deserialize)]
pub struct NewNews {
    pub title: String,
    pub text: String,
    /// Author name; token-based identity is handled upstream
    #[serde(default = "default_username")]
    pub username: String,
}

impl NewNews {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if blank(&self.title) {
            return Some("News title cannot be empty".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Some(format!(
                "News title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        if blank(&self.text) {
            return Some("News text cannot be empty".to_string());
        }
        None
    }
}

/// Request body for `PATCH /news/:id`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl NewsPatch {
    pub fn validate(&self) -> Option<String> {
        if self.title.as_deref().is_some_and(blank) {
            return Some("News title cannot be empty".to_string());
        }
        if self.text.as_deref().is_some_and(blank) {
            return Some("News text cannot be empty".to_string());
        }
        None
    }
}

/// Request body for `POST /comments`
#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub news_id: u64,
    pub text: String,
    #[serde(default = "default_username")]
    pub username: String,
}

impl NewComment {
    pub fn validate(&self) -> Option<String> {
        if self.news_id == 0 {
            return Some("News id must be positive".to_string());
        }
        if blank(&self.text) {
            return Some("Comment text cannot be empty".to_string());
        }
        None
    }
}

/// Request body for `PATCH /comments/:id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPatch {
    #[serde(default)]
    pub text: Option<String>,
}

impl CommentPatch {
    pub fn validate(&self) -> Option<String> {
        if self.text.as_deref().is_some_and(blank) {
            return Some("Comment text cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_news_deserialize_default_username() {
        let json = r#"{"title": "Rust 2.0", "text": "Not yet"}"#;
        let req: NewNews = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Rust 2.0");
        assert_eq!(req.username, "anonymous");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_new_news_blank_title() {
        let req = NewNews {
            title: "   ".to_string(),
            text: "body".to_string(),
            username: "alice".to_string(),
        };
        assert_eq!(req.validate().unwrap(), "News title cannot be empty");
    }

    #[test]
    fn test_new_news_title_too_long() {
        let req = NewNews {
            title: "x".repeat(MAX_TITLE_LENGTH + 1),
            text: "body".to_string(),
            username: "alice".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_news_patch_partial() {
        let patch: NewsPatch = serde_json::from_str(r#"{"text": "new text"}"#).unwrap();
        assert!(patch.title.is_none());
        assert!(patch.validate().is_none());

        let patch: NewsPatch = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(patch.validate().is_some());
    }

    #[test]
    fn test_new_comment_requires_positive_news_id() {
        let req: NewComment = serde_json::from_str(r#"{"news_id": 0, "text": "hi"}"#).unwrap();
        assert_eq!(req.validate().unwrap(), "News id must be positive");
    }

    #[test]
    fn test_comment_patch_blank_text() {
        let patch = CommentPatch {
            text: Some("".to_string()),
        };
        assert!(patch.validate().is_some());
        assert!(CommentPatch::default().validate().is_none());
    }
}
