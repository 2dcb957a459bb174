//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use ripple_core::domain::{Role, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub verification_status: String,
    #[sea_orm(nullable)]
    pub verification_token: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for ripple_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role.parse().unwrap_or_else(|_| {
                tracing::warn!(user_id = %model.id, value = %model.role, "Unknown role in users row, treating as USER");
                Role::User
            }),
            verification_status: model.verification_status.parse().unwrap_or_else(|_| {
                tracing::warn!(user_id = %model.id, value = %model.verification_status, "Unknown verification status in users row, treating as PENDING");
                VerificationStatus::Pending
            }),
            verification_token: model.verification_token,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<ripple_core::domain::User> for ActiveModel {
    fn from(user: ripple_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            verification_status: Set(user.verification_status.as_str().to_string()),
            verification_token: Set(user.verification_token),
            created_at: Set(user.created_at.into()),
        }
    }
}
