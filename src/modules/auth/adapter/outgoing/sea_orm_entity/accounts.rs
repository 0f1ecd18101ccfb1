use crate::auth::application::domain::entities::AdapterAccount;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(column_name = "userId", column_type = "Text")]
    pub user_id: String,

    #[sea_orm(column_name = "type", column_type = "Text")]
    pub account_type: String,

    // Composite primary key (provider, providerAccountId)
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub provider: String,

    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "providerAccountId",
        column_type = "Text"
    )]
    pub provider_account_id: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub refresh_token: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub access_token: Option<String>,
    pub expires_at: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub token_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub scope: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub id_token: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub session_state: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_adapter_account(&self) -> AdapterAccount {
        AdapterAccount {
            user_id: self.user_id.clone(),
            account_type: self.account_type.clone(),
            provider: self.provider.clone(),
            provider_account_id: self.provider_account_id.clone(),
            refresh_token: self.refresh_token.clone(),
            access_token: self.access_token.clone(),
            expires_at: self.expires_at,
            token_type: self.token_type.clone(),
            scope: self.scope.clone(),
            id_token: self.id_token.clone(),
            session_state: self.session_state.clone(),
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
