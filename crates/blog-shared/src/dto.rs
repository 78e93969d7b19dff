//! Data Transfer Objects - request/response types for the API.

use blog_core::domain::{Author, ExternalPost, PostFilter, PostPatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post.
///
/// Required fields are optional here so a missing one can be reported by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl CreatePostRequest {
    /// The first required field absent from the body, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_none() {
            Some("title")
        } else if self.content.is_none() {
            Some("content")
        } else if self.author.is_none() {
            Some("author")
        } else {
            None
        }
    }
}

/// Request to partially update a post. `id` must match the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl UpdatePostRequest {
    /// Keep only the whitelisted updatable fields.
    pub fn into_patch(self) -> PostPatch {
        PostPatch {
            title: self.title,
            content: self.content,
            author: self.author,
        }
    }
}

/// Exact-match filters accepted by `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl From<ListPostsQuery> for PostFilter {
    fn from(query: ListPostsQuery) -> Self {
        Self {
            title: query.title,
            content: query.content,
            author: query.author,
            created: query.created,
        }
    }
}

/// Public representation of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl From<ExternalPost> for PostResponse {
    fn from(post: ExternalPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            author: post.author,
            created: post.created,
        }
    }
}
