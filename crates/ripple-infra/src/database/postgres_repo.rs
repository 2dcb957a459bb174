//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbBackend, EntityTrait, FromQueryResult, IntoActiveModel,
    QueryFilter, Set, Statement, TransactionTrait,
};
use uuid::Uuid;

use ripple_core::domain::{Profile, User, VerificationStatus};
use ripple_core::error::RepoError;
use ripple_core::ports::{
    CommentRepository, CommentView, FeedPost, LikeRepository, PostRepository, SortOrder,
    UserRepository,
};

use super::entity::comment::Entity as CommentEntity;
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::Entity as PostEntity;
use super::entity::{profile, user};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<user::Entity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL like repository.
pub type PostgresLikeRepository = PostgresBaseRepository<LikeEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn register(&self, new_user: User, new_profile: Profile) -> Result<User, RepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let user_model = user::ActiveModel::from(new_user)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

        profile::ActiveModel::from(new_profile)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(user_model.into())
    }

    async fn redeem_verification_token(&self, token: &str) -> Result<Option<User>, RepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let found = user::Entity::find()
            .filter(user::Column::VerificationToken.eq(token))
            .one(&txn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let Some(model) = found else {
            // Unknown or already-redeemed token
            txn.rollback()
                .await
                .map_err(|e| RepoError::Query(e.to_string()))?;
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.verification_status = Set(VerificationStatus::Verified.as_str().to_string());
        active.verification_token = Set(None);

        let updated = active.update(&txn).await.map_err(map_db_err)?;

        txn.commit()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(updated.into()))
    }
}

/// Feed row as returned by the aggregate query.
#[derive(Debug, FromQueryResult)]
struct FeedRow {
    id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTimeWithTimeZone,
    email: String,
    full_name: String,
    like_count: i64,
    comment_count: i64,
}

impl From<FeedRow> for FeedPost {
    fn from(row: FeedRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            content: row.content,
            created_at: row.created_at.into(),
            email: row.email,
            full_name: row.full_name,
            like_count: row.like_count,
            comment_count: row.comment_count,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_page(
        &self,
        page: u64,
        size: u64,
        sort: SortOrder,
    ) -> Result<Vec<FeedPost>, RepoError> {
        let order = match sort {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };

        // Query params are caller-controlled u64s; a window whose offset
        // overflows lies past any addressable row, so it is just empty.
        let Some(offset) = page
            .checked_mul(size)
            .and_then(|offset| i64::try_from(offset).ok())
        else {
            return Ok(Vec::new());
        };
        let limit = i64::try_from(size).unwrap_or(i64::MAX);

        // Aggregates are computed per request; counts always reflect the
        // live likes/comments tables at read time.
        let sql = format!(
            "SELECT p.id, p.user_id, p.content, p.created_at, \
                    u.email, pr.full_name, \
                    (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count, \
                    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count \
             FROM posts p \
             JOIN users u ON p.user_id = u.id \
             JOIN profiles pr ON pr.user_id = u.id \
             ORDER BY p.created_at {order} \
             LIMIT $1 OFFSET $2"
        );

        let rows = FeedRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [limit.into(), offset.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Comment row joined with the commenter's display name.
#[derive(Debug, FromQueryResult)]
struct CommentRow {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTimeWithTimeZone,
    full_name: String,
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentView>, RepoError> {
        let rows = CommentRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT c.id, c.post_id, c.user_id, c.content, c.created_at, pr.full_name \
             FROM comments c \
             JOIN profiles pr ON pr.user_id = c.user_id \
             WHERE c.post_id = $1 \
             ORDER BY c.created_at DESC",
            [post_id.into()],
        ))
        .all(&self.db)
        .await
        .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| CommentView {
                id: row.id,
                post_id: row.post_id,
                user_id: row.user_id,
                content: row.content,
                created_at: row.created_at.into(),
                full_name: row.full_name,
            })
            .collect())
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), RepoError> {
        let model = like::ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
        };

        // The composite primary key rejects duplicates; the post_id foreign
        // key rejects likes on missing posts. map_db_err tells them apart.
        LikeEntity::insert(model)
            .exec(&self.db)
            .await
            .map(|_| ())
            .map_err(map_db_err)
    }
}
