//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use blog_core::domain::{Post, PostFilter, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Display name of the stored author, matching `Author::display_name`.
const AUTHOR_NAME_EQ: &str = "TRIM(CONCAT(author_first_name, ' ', author_last_name)) = $1";

fn filter_condition(filter: &PostFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(title) = &filter.title {
        condition = condition.add(post::Column::Title.eq(title.as_str()));
    }
    if let Some(content) = &filter.content {
        condition = condition.add(post::Column::Content.eq(content.as_str()));
    }
    if let Some(author) = &filter.author {
        condition = condition.add(Expr::cust_with_values(AUTHOR_NAME_EQ, [author.as_str()]));
    }
    if let Some(created) = filter.created {
        condition = condition.add(post::Column::Created.eq(created));
    }

    condition
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find(&self, filter: &PostFilter, limit: u64) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(?filter, limit, "Finding posts");

        let result = PostEntity::find()
            .filter(filter_condition(filter))
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError> {
        if patch.is_empty() {
            let existing = PostEntity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(map_db_err)?;
            return existing.map(Into::into).ok_or(RepoError::NotFound);
        }

        let model = post::ActiveModel::from_patch(id, patch)
            .update(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }
}
