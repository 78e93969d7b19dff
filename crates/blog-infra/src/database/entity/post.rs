//! Blog post entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::{Author, Post, PostPatch};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_first_name: String,
    pub author_last_name: String,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Active model that only updates the fields present in `patch`.
    pub fn from_patch(id: Uuid, patch: PostPatch) -> Self {
        Self {
            id: Unchanged(id),
            title: patch.title.map(Set).unwrap_or(NotSet),
            content: patch.content.map(Set).unwrap_or(NotSet),
            author_first_name: patch
                .author
                .as_ref()
                .map(|a| Set(a.first_name.clone()))
                .unwrap_or(NotSet),
            author_last_name: patch
                .author
                .map(|a| Set(a.last_name))
                .unwrap_or(NotSet),
            created: NotSet,
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: Author::new(model.author_first_name, model.author_last_name),
            created: model.created.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author_first_name: Set(post.author.first_name),
            author_last_name: Set(post.author.last_name),
            created: Set(post.created.into()),
        }
    }
}
