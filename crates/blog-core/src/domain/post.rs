use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;
use crate::error::DomainError;

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

/// The representation of a post that crosses the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID.
    ///
    /// `created` defaults to the current time when not supplied.
    pub fn new(
        title: String,
        content: String,
        author: Author,
        created: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        validate_title(&title)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            created: created.unwrap_or_else(Utc::now),
        })
    }

    /// Project the stored record into its external representation.
    pub fn to_external(&self) -> ExternalPost {
        ExternalPost {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.display_name(),
            created: self.created,
        }
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("`title` must not be empty".to_string()));
    }
    Ok(())
}

/// Partial update of the mutable post fields.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }

    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(author) = &self.author {
            post.author = author.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            "Title".to_string(),
            "Body".to_string(),
            Author::new("Jane", "Doe"),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_blank_title() {
        let result = Post::new("  ".to_string(), "Body".to_string(), Author::default(), None);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_new_keeps_supplied_created() {
        let created = "2020-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap();
        let post = Post::new(
            "Title".to_string(),
            "Body".to_string(),
            Author::default(),
            Some(created),
        )
        .unwrap();
        assert_eq!(post.created, created);
    }

    #[test]
    fn test_to_external_projects_author_name() {
        let post = sample();
        let external = post.to_external();
        assert_eq!(external.id, post.id);
        assert_eq!(external.title, "Title");
        assert_eq!(external.content, "Body");
        assert_eq!(external.author, "Jane Doe");
        assert_eq!(external.created, post.created);
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut post = sample();
        let patch = PostPatch {
            content: Some("Updated".to_string()),
            ..Default::default()
        };
        patch.apply(&mut post);
        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "Updated");
        assert_eq!(post.author, Author::new("Jane", "Doe"));
    }

    #[test]
    fn test_patch_applied_twice_matches_once() {
        let patch = PostPatch {
            title: Some("New".to_string()),
            author: Some(Author::new("John", "Roe")),
            ..Default::default()
        };
        let mut once = sample();
        patch.apply(&mut once);
        let mut twice = once.clone();
        patch.apply(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_patch_validate_rejects_empty_title() {
        let patch = PostPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(PostPatch::default().is_empty());
    }
}
