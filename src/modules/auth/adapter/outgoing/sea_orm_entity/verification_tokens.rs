use crate::auth::application::domain::entities::VerificationToken;
use sea_orm::entity::prelude::*;

/// Single-use tokens for passwordless and email verification flows.
/// Rows are inserted and deleted, never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "verificationToken")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub identifier: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub token: String,
    pub expires: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_verification_token(&self) -> VerificationToken {
        VerificationToken {
            identifier: self.identifier.clone(),
            token: self.token.clone(),
            expires: self.expires.to_utc(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
