//! Profile entity for SeaORM, 1:1 with users.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub full_name: String,
    #[sea_orm(nullable)]
    pub bio: Option<String>,
    #[sea_orm(nullable)]
    pub avatar_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ripple_core::domain::Profile {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            full_name: model.full_name,
            bio: model.bio,
            avatar_url: model.avatar_url,
        }
    }
}

impl From<ripple_core::domain::Profile> for ActiveModel {
    fn from(profile: ripple_core::domain::Profile) -> Self {
        Self {
            user_id: Set(profile.user_id),
            full_name: Set(profile.full_name),
            bio: Set(profile.bio),
            avatar_url: Set(profile.avatar_url),
        }
    }
}
