use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::auth::application::domain::entities::{
    AccountKey, AdapterAccount, AdapterSession, AdapterUser, NewUser, SessionAndUser,
    SessionPatch, UserPatch, VerificationToken, VerificationTokenKey,
};
use crate::auth::application::ports::outgoing::{AdapterError, AuthAdapter};

mock! {
    pub Adapter {}

    #[async_trait]
    impl AuthAdapter for Adapter {
        async fn create_user(&self, user: NewUser) -> Result<AdapterUser, AdapterError>;
        async fn get_user(&self, id: &str) -> Result<Option<AdapterUser>, AdapterError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<AdapterUser>, AdapterError>;
        async fn create_session(&self, session: AdapterSession) -> Result<AdapterSession, AdapterError>;
        async fn get_session_and_user(
            &self,
            session_token: &str,
        ) -> Result<Option<SessionAndUser>, AdapterError>;
        async fn update_user(&self, patch: UserPatch) -> Result<AdapterUser, AdapterError>;
        async fn update_session(
            &self,
            patch: SessionPatch,
        ) -> Result<Option<AdapterSession>, AdapterError>;
        async fn link_account(&self, account: AdapterAccount) -> Result<(), AdapterError>;
        async fn get_user_by_account(
            &self,
            key: &AccountKey,
        ) -> Result<Option<AdapterUser>, AdapterError>;
        async fn delete_session(&self, session_token: &str) -> Result<(), AdapterError>;
        async fn create_verification_token(
            &self,
            token: VerificationToken,
        ) -> Result<VerificationToken, AdapterError>;
        async fn use_verification_token(
            &self,
            key: &VerificationTokenKey,
        ) -> Result<Option<VerificationToken>, AdapterError>;
        async fn delete_user(&self, id: &str) -> Result<(), AdapterError>;
        async fn unlink_account(&self, key: &AccountKey) -> Result<(), AdapterError>;
        async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, AdapterError>;
        async fn delete_expired_verification_tokens(
            &self,
            now: DateTime<Utc>,
        ) -> Result<u64, AdapterError>;
    }
}
