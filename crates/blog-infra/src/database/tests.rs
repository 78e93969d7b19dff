#[cfg(test)]
mod tests {
    use crate::database::DatabaseConnections;
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use blog_core::domain::{Author, Post, PostFilter, PostPatch};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: uuid::Uuid, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            author_first_name: "Jane".to_owned(),
            author_last_name: "Doe".to_owned(),
            created: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.author, Author::new("Jane", "Doe"));
    }

    #[tokio::test]
    async fn test_create_post_returns_inserted_row() {
        let post = Post::new(
            "New".to_owned(),
            "Content".to_owned(),
            Author::new("Jane", "Doe"),
            None,
        )
        .unwrap();

        let mut row = model(post.id, "New");
        row.created = post.created.into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let created = repo.create(post.clone()).await.unwrap();

        assert_eq!(created, post);
    }

    #[tokio::test]
    async fn test_find_applies_filter_and_limit() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(uuid::Uuid::new_v4(), "Foo")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let filter = PostFilter {
            title: Some("Foo".to_owned()),
            author: Some("Jane Doe".to_owned()),
            ..Default::default()
        };
        let posts = repo.find(&filter, 10).await.unwrap();
        assert_eq!(posts.len(), 1);

        let log = repo.db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("title"));
        assert!(sql.contains("author_first_name"));
        assert!(sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let patch = PostPatch {
            title: Some("Changed".to_owned()),
            ..Default::default()
        };
        let result = repo.update(uuid::Uuid::new_v4(), patch).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let id = uuid::Uuid::new_v4();

        assert!(BaseRepository::<Post, _>::delete(&repo, id).await.unwrap());
        assert!(!BaseRepository::<Post, _>::delete(&repo, id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_sets_only_patched_columns() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Changed")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let patch = PostPatch {
            title: Some("Changed".to_owned()),
            ..Default::default()
        };
        let updated = repo.update(post_id, patch).await.unwrap();
        assert_eq!(updated.id, post_id);
        assert_eq!(updated.title, "Changed");

        let log = repo.db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        let set_clause = sql
            .split("SET")
            .nth(1)
            .and_then(|rest| rest.split("WHERE").next())
            .unwrap();
        assert!(sql.contains("UPDATE"));
        assert!(set_clause.contains("title"));
        assert!(!set_clause.contains("content"));
        assert!(!set_clause.contains("author_first_name"));
        assert!(!set_clause.contains("created"));
    }

    #[tokio::test]
    async fn test_empty_update_returns_existing_post_unchanged() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Original")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let post = repo.update(post_id, PostPatch::default()).await.unwrap();
        assert_eq!(post.title, "Original");

        let log = repo.db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("SELECT"));
        assert!(!sql.contains("UPDATE"));
    }

    #[tokio::test]
    async fn test_empty_update_on_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo.update(uuid::Uuid::new_v4(), PostPatch::default()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_prepare_creates_posts_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let connections = DatabaseConnections::prepare(db).await.unwrap();

        let log = connections.main.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS"));
        assert!(sql.contains("blog_posts"));
    }

    #[tokio::test]
    async fn test_prepare_fails_when_table_cannot_be_created() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("permission denied".to_owned())])
            .into_connection();

        let result = DatabaseConnections::prepare(db).await;

        assert!(result.is_err());
    }
}
