use crate::auth::application::domain::entities::AdapterSession;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "sessionToken",
        column_type = "Text"
    )]
    pub session_token: String,

    #[sea_orm(column_name = "userId", column_type = "Text")]
    pub user_id: String,

    pub expires: DateTimeWithTimeZone,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_adapter_session(&self) -> AdapterSession {
        AdapterSession {
            session_token: self.session_token.clone(),
            user_id: self.user_id.clone(),
            expires: self.expires.to_utc(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
