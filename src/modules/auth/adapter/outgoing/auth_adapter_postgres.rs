use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    AccountKey, AdapterAccount, AdapterSession, AdapterUser, NewUser, SessionAndUser,
    SessionPatch, UserPatch, VerificationToken, VerificationTokenKey,
};
use crate::auth::application::ports::outgoing::{AdapterError, AuthAdapter};

use super::sea_orm_entity::accounts::{
    ActiveModel as AccountActiveModel, Column as AccountColumn, Entity as AccountEntity,
};
use super::sea_orm_entity::sessions::{
    ActiveModel as SessionActiveModel, Column as SessionColumn, Entity as SessionEntity,
};
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use super::sea_orm_entity::verification_tokens::{
    ActiveModel as VerificationTokenActiveModel, Column as VerificationTokenColumn,
    Entity as VerificationTokenEntity,
};

/// Postgres-backed persistence for the authentication controller.
#[derive(Clone, Debug)]
pub struct AuthAdapterPostgres {
    db: Arc<DatabaseConnection>,
}

impl AuthAdapterPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthAdapter for AuthAdapterPostgres {
    async fn create_user(&self, user: NewUser) -> Result<AdapterUser, AdapterError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(user.name),
            email: Set(user.email),
            email_verified: Set(user.email_verified.map(|dt| dt.fixed_offset())),
            image: Set(user.image),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create_user", e))?;

        Ok(inserted.to_adapter_user())
    }

    async fn get_user(&self, id: &str) -> Result<Option<AdapterUser>, AdapterError> {
        let user = UserEntity::find_by_id(id.to_owned())
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("get_user", e))?;

        Ok(user.map(|m| m.to_adapter_user()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<AdapterUser>, AdapterError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("get_user_by_email", e))?;

        Ok(user.map(|m| m.to_adapter_user()))
    }

    async fn create_session(
        &self,
        session: AdapterSession,
    ) -> Result<AdapterSession, AdapterError> {
        let active_session = SessionActiveModel {
            session_token: Set(session.session_token),
            user_id: Set(session.user_id),
            expires: Set(session.expires.fixed_offset()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_session
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create_session", e))?;

        Ok(inserted.to_adapter_session())
    }

    async fn get_session_and_user(
        &self,
        session_token: &str,
    ) -> Result<Option<SessionAndUser>, AdapterError> {
        let row = SessionEntity::find_by_id(session_token.to_owned())
            .find_also_related(UserEntity)
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("get_session_and_user", e))?;

        // The FK guarantees an owner; a missing one is treated as no session.
        Ok(row.and_then(|(session, user)| {
            user.map(|u| SessionAndUser {
                session: session.to_adapter_session(),
                user: u.to_adapter_user(),
            })
        }))
    }

    async fn update_user(&self, patch: UserPatch) -> Result<AdapterUser, AdapterError> {
        let id = patch.id.ok_or(AdapterError::MissingUserId)?;

        let mut model = <UserActiveModel as Default>::default();

        if let Some(name) = patch.name.into_change() {
            model.name = Set(name);
        }
        if let Some(email) = patch.email {
            model.email = Set(email);
        }
        if let Some(verified) = patch.email_verified.into_change() {
            model.email_verified = Set(verified.map(|dt| dt.fixed_offset()));
        }
        if let Some(image) = patch.image.into_change() {
            model.image = Set(image);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = UserEntity::update_many()
            .set(model)
            .filter(UserColumn::Id.eq(id.as_str()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| map_db_err("update_user", e))?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_adapter_user())
            .ok_or(AdapterError::UserNotFound)
    }

    async fn update_session(
        &self,
        patch: SessionPatch,
    ) -> Result<Option<AdapterSession>, AdapterError> {
        let mut model = <SessionActiveModel as Default>::default();

        if let Some(user_id) = patch.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(expires) = patch.expires {
            model.expires = Set(expires.fixed_offset());
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = SessionEntity::update_many()
            .set(model)
            .filter(SessionColumn::SessionToken.eq(patch.session_token.as_str()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| map_db_err("update_session", e))?;

        Ok(updated.into_iter().next().map(|m| m.to_adapter_session()))
    }

    async fn link_account(&self, account: AdapterAccount) -> Result<(), AdapterError> {
        let active_account = AccountActiveModel {
            user_id: Set(account.user_id),
            account_type: Set(account.account_type),
            provider: Set(account.provider),
            provider_account_id: Set(account.provider_account_id),
            refresh_token: Set(account.refresh_token),
            access_token: Set(account.access_token),
            expires_at: Set(account.expires_at),
            token_type: Set(account.token_type),
            scope: Set(account.scope),
            id_token: Set(account.id_token),
            session_state: Set(account.session_state),
            created_at: NotSet,
            updated_at: NotSet,
        };

        active_account
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("link_account", e))?;

        Ok(())
    }

    async fn get_user_by_account(
        &self,
        key: &AccountKey,
    ) -> Result<Option<AdapterUser>, AdapterError> {
        let row = AccountEntity::find()
            .filter(AccountColumn::Provider.eq(key.provider.as_str()))
            .filter(AccountColumn::ProviderAccountId.eq(key.provider_account_id.as_str()))
            .find_also_related(UserEntity)
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("get_user_by_account", e))?;

        Ok(row.and_then(|(_, user)| user).map(|u| u.to_adapter_user()))
    }

    async fn delete_session(&self, session_token: &str) -> Result<(), AdapterError> {
        SessionEntity::delete_by_id(session_token.to_owned())
            .exec(&*self.db)
            .await
            .map_err(|e| map_db_err("delete_session", e))?;

        Ok(())
    }

    async fn create_verification_token(
        &self,
        token: VerificationToken,
    ) -> Result<VerificationToken, AdapterError> {
        let active_token = VerificationTokenActiveModel {
            identifier: Set(token.identifier),
            token: Set(token.token),
            expires: Set(token.expires.fixed_offset()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_token
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create_verification_token", e))?;

        Ok(inserted.to_verification_token())
    }

    async fn use_verification_token(
        &self,
        key: &VerificationTokenKey,
    ) -> Result<Option<VerificationToken>, AdapterError> {
        // Single statement: of two concurrent consumers only one gets the row.
        let deleted = VerificationTokenEntity::delete_many()
            .filter(VerificationTokenColumn::Identifier.eq(key.identifier.as_str()))
            .filter(VerificationTokenColumn::Token.eq(key.token.as_str()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| {
                error!(identifier = %key.identifier, error = %e, "Verification token consumption failed");
                AdapterError::TokenConsumption(e.to_string())
            })?;

        Ok(deleted.into_iter().next().map(|m| m.to_verification_token()))
    }

    async fn delete_user(&self, id: &str) -> Result<(), AdapterError> {
        UserEntity::delete_by_id(id.to_owned())
            .exec(&*self.db)
            .await
            .map_err(|e| map_db_err("delete_user", e))?;

        Ok(())
    }

    async fn unlink_account(&self, key: &AccountKey) -> Result<(), AdapterError> {
        AccountEntity::delete_many()
            .filter(AccountColumn::Provider.eq(key.provider.as_str()))
            .filter(AccountColumn::ProviderAccountId.eq(key.provider_account_id.as_str()))
            .exec(&*self.db)
            .await
            .map_err(|e| map_db_err("unlink_account", e))?;

        Ok(())
    }

    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, AdapterError> {
        let res = SessionEntity::delete_many()
            .filter(SessionColumn::Expires.lte(now.fixed_offset()))
            .exec(&*self.db)
            .await
            .map_err(|e| map_db_err("delete_expired_sessions", e))?;

        Ok(res.rows_affected)
    }

    async fn delete_expired_verification_tokens(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, AdapterError> {
        let res = VerificationTokenEntity::delete_many()
            .filter(VerificationTokenColumn::Expires.lte(now.fixed_offset()))
            .exec(&*self.db)
            .await
            .map_err(|e| map_db_err("delete_expired_verification_tokens", e))?;

        Ok(res.rows_affected)
    }
}

fn map_db_err(operation: &'static str, e: DbErr) -> AdapterError {
    error!(operation, error = %e, "Auth adapter storage failure");
    AdapterError::Storage(e.to_string())
}
