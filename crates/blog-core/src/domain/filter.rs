use chrono::{DateTime, Utc};

use super::Post;

/// Exact-match filter applied when listing posts.
///
/// Every present field must equal the corresponding post value. `author`
/// is compared against the projected display name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        self.title.as_ref().is_none_or(|t| *t == post.title)
            && self.content.as_ref().is_none_or(|c| *c == post.content)
            && self
                .author
                .as_ref()
                .is_none_or(|a| *a == post.author.display_name())
            && self.created.is_none_or(|c| c == post.created)
    }
}
