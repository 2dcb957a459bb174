#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_base::map_sql_err;
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use ripple_core::domain::{Post, Role, User, VerificationStatus};
    use ripple_core::error::RepoError;
    use ripple_core::ports::{BaseRepository, PostRepository, SortOrder, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, SqlErr};

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                user_id,
                content: "Hello feed".to_owned(),
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.content, "Hello feed");
        assert_eq!(found.id, post_id);
    }

    #[tokio::test]
    async fn test_find_user_by_email_converts_enums() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                email: "admin@x.com".to_owned(),
                password_hash: "$argon2id$stub".to_owned(),
                role: "ADMIN".to_owned(),
                verification_status: "VERIFIED".to_owned(),
                verification_token: None,
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let found: User = repo.find_by_email("admin@x.com").await.unwrap().unwrap();

        assert_eq!(found.role, Role::Admin);
        assert_eq!(found.verification_status, VerificationStatus::Verified);
        assert!(found.verification_token.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Result<(), RepoError> =
            BaseRepository::<Post, _>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[test]
    fn test_unique_violation_maps_to_constraint() {
        let mapped = map_sql_err(SqlErr::UniqueConstraintViolation(
            "duplicate key value violates unique constraint \"pk_likes\"".to_owned(),
        ));

        assert!(matches!(mapped, RepoError::Constraint(_)));
    }

    #[test]
    fn test_fk_violation_maps_to_not_found() {
        let mapped = map_sql_err(SqlErr::ForeignKeyConstraintViolation(
            "insert or update on table \"likes\" violates foreign key constraint".to_owned(),
        ));

        assert!(matches!(mapped, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_feed_page_past_offset_range_is_empty() {
        // No query results appended: an overflowing window must return
        // empty without ever touching the database.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo
            .list_page(u64::MAX, 2, SortOrder::Desc)
            .await
            .unwrap();

        assert!(posts.is_empty());
    }

    #[test]
    fn test_unknown_role_falls_back_to_user() {
        let model = user::Model {
            id: uuid::Uuid::new_v4(),
            email: "odd@x.com".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            role: "SUPERUSER".to_owned(),
            verification_status: "MAYBE".to_owned(),
            verification_token: None,
            created_at: chrono::Utc::now().into(),
        };

        let converted: User = model.into();

        assert_eq!(converted.role, Role::User);
        assert_eq!(converted.verification_status, VerificationStatus::Pending);
    }

    #[tokio::test]
    async fn test_redeem_unknown_token_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result = repo.redeem_verification_token("no-such-token").await.unwrap();

        assert!(result.is_none());
    }
}
